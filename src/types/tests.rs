//! Unit tests for argument types and conversions

use super::*;
use std::str::FromStr;

#[cfg(test)]
mod season_tests {
    use super::*;

    #[test]
    fn test_season_new() {
        let season = Season::new(2025);
        assert_eq!(season.as_u16(), 2025);
        assert_eq!(season.to_string(), "2025");
    }

    #[test]
    fn test_season_from_str_trims() {
        assert_eq!(Season::from_str(" 2024 ").unwrap(), Season::new(2024));
    }

    #[test]
    fn test_season_from_str_invalid() {
        let err = Season::from_str("twenty").unwrap_err();
        assert!(err.to_string().contains("invalid season"));
    }

    #[test]
    fn test_season_serializes_as_number() {
        assert_eq!(serde_json::to_value(Season::new(2023)).unwrap(), 2023);
    }
}

#[cfg(test)]
mod week_tests {
    use super::*;

    #[test]
    fn test_week_default_is_one() {
        assert_eq!(Week::default().as_u16(), 1);
    }

    #[test]
    fn test_week_from_str() {
        assert_eq!(Week::from_str("17").unwrap(), Week::new(17));
        assert!(Week::from_str("-1").is_err());
    }

    #[test]
    fn test_week_ordering() {
        assert!(Week::new(1) < Week::new(2));
    }
}

#[cfg(test)]
mod sport_tests {
    use super::*;

    #[test]
    fn test_sport_display() {
        let rendered: Vec<String> = Sport::ALL.iter().map(Sport::to_string).collect();
        assert_eq!(rendered, vec!["nfl", "nba", "mlb", "nhl"]);
    }

    #[test]
    fn test_sport_from_str_is_case_insensitive() {
        assert_eq!(Sport::from_str("NFL").unwrap(), Sport::Nfl);
        assert_eq!(Sport::from_str(" Nhl ").unwrap(), Sport::Nhl);
    }

    #[test]
    fn test_sport_from_str_invalid() {
        let err = Sport::from_str("invalid_sport").unwrap_err();
        assert!(matches!(err, crate::SleeperError::InvalidInput { .. }));
    }

    #[test]
    fn test_sport_serde_round_trip() {
        assert_eq!(serde_json::to_value(Sport::Mlb).unwrap(), "mlb");
        let sport: Sport = serde_json::from_str("\"nba\"").unwrap();
        assert_eq!(sport, Sport::Nba);
    }
}

#[cfg(test)]
mod trending_type_tests {
    use super::*;

    #[test]
    fn test_trending_type_display() {
        assert_eq!(TrendingType::Add.to_string(), "add");
        assert_eq!(TrendingType::Drop.to_string(), "drop");
    }

    #[test]
    fn test_trending_type_from_str() {
        assert_eq!(TrendingType::from_str("DROP").unwrap(), TrendingType::Drop);
        assert!(TrendingType::from_str("invalid_type").is_err());
    }
}
