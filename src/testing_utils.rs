use crate::data_fetcher::models::Game;

/// Test utilities for creating mock data and testing scenarios
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a game with every field filled in
    pub fn create_game(
        id: &str,
        date: &str,
        start_time: &str,
        venue_id: &str,
        venue_name: &str,
        home_team: &str,
        away_team: &str,
        officials: &[&str],
    ) -> Game {
        Game {
            id: id.to_string(),
            date: date.to_string(),
            start_time: start_time.to_string(),
            venue_id: venue_id.to_string(),
            venue_name: venue_name.to_string(),
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            officials: officials.iter().map(|name| name.to_string()).collect(),
        }
    }

    /// Creates a game at Lubbeek on `date` starting at `start_time`
    pub fn game_on(id: &str, date: &str, start_time: &str) -> Game {
        Self::game_at(id, date, start_time, "BVBL500075")
    }

    /// Creates a game at the given venue id
    pub fn game_at(id: &str, date: &str, start_time: &str, venue_id: &str) -> Game {
        let venue_name = match venue_id {
            "BVBL500419" => "Boutersem",
            "BVBL500075" => "Lubbeek",
            _ => "Elders",
        };
        Self::create_game(
            id,
            date,
            start_time,
            venue_id,
            venue_name,
            "Hageland United HSE A",
            "Basket Leuven B",
            &["Jan Peeters", "Els Janssens"],
        )
    }

    /// Creates a game with the given team names
    pub fn create_matchup(id: &str, start_time: &str, home_team: &str, away_team: &str) -> Game {
        Game {
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            ..Self::game_on(id, "01-02-2025", start_time)
        }
    }

    /// Creates a game without assigned officials
    pub fn create_game_without_officials(id: &str, date: &str) -> Game {
        Game {
            officials: Vec::new(),
            ..Self::game_on(id, date, "14:00")
        }
    }
}
