//! Display formatting helpers for catalog metadata.

/// "8.246" → "8.2"; zero means unrated.
pub fn rating(vote_average: f32) -> String {
    if vote_average <= 0.0 {
        "–".into()
    } else {
        format!("{vote_average:.1}")
    }
}

/// Minutes → "2h 16m" / "45m".
pub fn runtime(minutes: u32) -> String {
    if minutes >= 60 {
        format!("{}h {}m", minutes / 60, minutes % 60)
    } else {
        format!("{minutes}m")
    }
}

/// "S2 E5" label for an episode.
pub fn episode_code(season: u32, episode: u32) -> String {
    format!("S{season} E{episode}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating() {
        assert_eq!(rating(8.24), "8.2");
        assert_eq!(rating(0.0), "–");
    }

    #[test]
    fn test_runtime() {
        assert_eq!(runtime(136), "2h 16m");
        assert_eq!(runtime(45), "45m");
        assert_eq!(runtime(60), "1h 0m");
    }

    #[test]
    fn test_episode_code() {
        assert_eq!(episode_code(2, 5), "S2 E5");
    }
}
