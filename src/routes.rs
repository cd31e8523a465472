//! Maps the served path to the page the bundle mounts.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Drivers,
    Constructors,
    Races,
    RaceDetail(String),
    CircuitDetail(String),
    RaceStats,
    Compare,
    AddData,
    NotFound,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Page::Home,
            ["drivers"] => Page::Drivers,
            ["constructors"] => Page::Constructors,
            ["races"] => Page::Races,
            ["races", id] => Page::RaceDetail(id.to_string()),
            ["circuits", id] => Page::CircuitDetail(id.to_string()),
            ["race-stats"] => Page::RaceStats,
            ["compare-data"] => Page::Compare,
            ["data-panel"] => Page::AddData,
            _ => Page::NotFound,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "F1 Stats",
            Page::Drivers => "Drivers",
            Page::Constructors => "Constructors",
            Page::Races => "Races",
            Page::RaceDetail(_) => "Race",
            Page::CircuitDetail(_) => "Circuit",
            Page::RaceStats => "Race Stats",
            Page::Compare => "Compare Drivers",
            Page::AddData => "Add Data",
            Page::NotFound => "Not Found",
        }
    }
}

/// Navigation bar entries: label and href.
pub const NAV_LINKS: [(&str, &str); 7] = [
    ("Home", "/"),
    ("Drivers", "/drivers"),
    ("Constructors", "/constructors"),
    ("Races", "/races"),
    ("Race Stats", "/race-stats"),
    ("Compare", "/compare-data"),
    ("Add Data", "/data-panel"),
];

pub fn race_href(id: impl std::fmt::Display) -> String {
    format!("/races/{}", id)
}

pub fn circuit_href(id: impl std::fmt::Display) -> String {
    format!("/circuits/{}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_pages() {
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path(""), Page::Home);
        assert_eq!(Page::from_path("/drivers"), Page::Drivers);
        assert_eq!(Page::from_path("/drivers/"), Page::Drivers);
        assert_eq!(Page::from_path("/compare-data"), Page::Compare);
        assert_eq!(Page::from_path("/data-panel"), Page::AddData);
    }

    #[test]
    fn detail_pages_carry_the_id() {
        assert_eq!(
            Page::from_path("/races/1100"),
            Page::RaceDetail("1100".into())
        );
        assert_eq!(
            Page::from_path("/circuits/monza"),
            Page::CircuitDetail("monza".into())
        );
        assert_eq!(Page::from_path(&race_href(7)), Page::RaceDetail("7".into()));
    }

    #[test]
    fn unknown_paths() {
        assert_eq!(Page::from_path("/races/1/extra"), Page::NotFound);
        assert_eq!(Page::from_path("/admin"), Page::NotFound);
    }

    #[test]
    fn every_nav_link_routes_somewhere() {
        for (_, href) in NAV_LINKS {
            assert_ne!(Page::from_path(href), Page::NotFound);
        }
    }
}
