//! Candidate robot addresses for a team number
//!
//! Teams are mapped onto the `10.TE.AM.x` scheme: `TE` is the team number
//! divided by 100 and `AM` the remainder.

/// Last-resort address, always present at the end of the candidate list
pub const LOOPBACK: &str = "127.0.0.1";

/// Static address `<net>.TE.AM.<host>` for `team`
pub fn static_ip(net: u8, team: u16, host: u8) -> String {
    format!("{}.{}.{}.{}", net, team / 100, team % 100, host)
}

/// Addresses to try for `team`, most specific first
pub fn candidate_addresses(team: u16) -> Vec<String> {
    vec![
        format!("roboRIO-{}-FRC.local", team),
        format!("roboRIO-{}-FRC._ni._tcp.local", team),
        static_ip(172, team, 2),
        static_ip(10, team, 2),
        LOOPBACK.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_ip_splits_team_number() {
        assert_eq!(static_ip(10, 118, 2), "10.1.18.2");
        assert_eq!(static_ip(10, 3794, 2), "10.37.94.2");
        assert_eq!(static_ip(172, 254, 2), "172.2.54.2");
    }

    #[test]
    fn test_static_ip_small_team() {
        assert_eq!(static_ip(10, 7, 2), "10.0.7.2");
        assert_eq!(static_ip(10, 0, 1), "10.0.0.1");
    }

    #[test]
    fn test_candidates_for_team_118() {
        let list = candidate_addresses(118);
        assert_eq!(list.len(), 5);
        assert_eq!(list[0], "roboRIO-118-FRC.local");
        assert_eq!(list[1], "roboRIO-118-FRC._ni._tcp.local");
        assert_eq!(list[2], "172.1.18.2");
        assert_eq!(list[3], "10.1.18.2");
        assert_eq!(list[4], LOOPBACK);
        assert!(list.iter().all(|a| !a.is_empty()));
    }

    #[test]
    fn test_candidates_always_end_with_loopback() {
        for team in [0, 1, 99, 100, 9999, u16::MAX] {
            let list = candidate_addresses(team);
            assert_eq!(list.len(), 5);
            assert_eq!(list.last().map(String::as_str), Some("127.0.0.1"));
        }
    }
}
