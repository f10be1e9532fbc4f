use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::animation::ActionType;

/// A named point on an animation progress timeline.
///
/// Each action type has its own closed set of names; the order of `ALL` is
/// the order options are offered in.
pub trait RangeName:
    Copy + Eq + std::fmt::Debug + Serialize + DeserializeOwned + 'static
{
    /// The action type this set of names belongs to.
    const ACTION: ActionType;
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;
    fn description(self) -> &'static str;

    fn parse(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|name| name.as_str() == key)
    }

    /// The name shown when a timing has no range yet.
    fn first() -> Self {
        Self::ALL[0]
    }
}

/// Scroll timelines have no named ranges in CSS. `start` and `end` stand in
/// for `calc(0% + offset)` and `calc(100% - offset)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollRangeName {
    Start,
    End,
}

impl RangeName for ScrollRangeName {
    const ACTION: ActionType = ActionType::Scroll;
    const ALL: &'static [Self] = &[ScrollRangeName::Start, ScrollRangeName::End];

    fn as_str(self) -> &'static str {
        match self {
            ScrollRangeName::Start => "start",
            ScrollRangeName::End => "end",
        }
    }

    fn description(self) -> &'static str {
        match self {
            ScrollRangeName::Start => {
                "Distance from the top of the scroll container where animation begins"
            }
            ScrollRangeName::End => {
                "Distance from the bottom of the scroll container where animation ends"
            }
        }
    }
}

/// CSS `<timeline-range-name>` values for view timelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewRangeName {
    Entry,
    Exit,
    Contain,
    Cover,
    EntryCrossing,
    ExitCrossing,
}

impl RangeName for ViewRangeName {
    const ACTION: ActionType = ActionType::View;
    const ALL: &'static [Self] = &[
        ViewRangeName::Entry,
        ViewRangeName::Exit,
        ViewRangeName::Contain,
        ViewRangeName::Cover,
        ViewRangeName::EntryCrossing,
        ViewRangeName::ExitCrossing,
    ];

    fn as_str(self) -> &'static str {
        match self {
            ViewRangeName::Entry => "entry",
            ViewRangeName::Exit => "exit",
            ViewRangeName::Contain => "contain",
            ViewRangeName::Cover => "cover",
            ViewRangeName::EntryCrossing => "entry-crossing",
            ViewRangeName::ExitCrossing => "exit-crossing",
        }
    }

    fn description(self) -> &'static str {
        match self {
            ViewRangeName::Entry => "Animates during entry (starts entering → fully visible)",
            ViewRangeName::Exit => "Animates during exit (starts exiting → fully hidden)",
            ViewRangeName::Contain => {
                "Animates only while the element is fully in view (fully visible after entering → starts exiting)"
            }
            ViewRangeName::Cover => {
                "Animates entire time the element is visible (starts entering → ends after exiting)"
            }
            ViewRangeName::EntryCrossing => {
                "Animates as the element enters (leading edge → trailing edge enters view)"
            }
            ViewRangeName::ExitCrossing => {
                "Animates as the element exits (leading edge → trailing edge leaves view)"
            }
        }
    }
}

impl std::fmt::Display for ScrollRangeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::fmt::Display for ViewRangeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Option keys offered by a range picker, in display order.
pub fn range_keys(action_type: ActionType) -> Vec<&'static str> {
    match action_type {
        ActionType::Scroll => ScrollRangeName::ALL.iter().map(|n| n.as_str()).collect(),
        ActionType::View => ViewRangeName::ALL.iter().map(|n| n.as_str()).collect(),
    }
}

/// Description for a range key, matched exactly.
pub fn range_description(action_type: ActionType, key: &str) -> Option<&'static str> {
    match action_type {
        ActionType::Scroll => ScrollRangeName::parse(key).map(|name| name.description()),
        ActionType::View => ViewRangeName::parse(key).map(|name| name.description()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_keys_order() {
        assert_eq!(range_keys(ActionType::Scroll), vec!["start", "end"]);
        assert_eq!(
            range_keys(ActionType::View),
            vec!["entry", "exit", "contain", "cover", "entry-crossing", "exit-crossing"]
        );
    }

    #[test]
    fn test_parse_is_exact_and_type_specific() {
        assert_eq!(ViewRangeName::parse("entry-crossing"), Some(ViewRangeName::EntryCrossing));
        assert_eq!(ViewRangeName::parse("start"), None);
        assert_eq!(ScrollRangeName::parse("entry"), None);
        assert_eq!(ScrollRangeName::parse("Start"), None);
    }

    #[test]
    fn test_range_description_lookup() {
        assert!(range_description(ActionType::Scroll, "end")
            .unwrap()
            .contains("bottom of the scroll container"));
        assert!(range_description(ActionType::Scroll, "cover").is_none());
        assert!(range_description(ActionType::View, "cover").is_some());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ViewRangeName::ExitCrossing).unwrap();
        assert_eq!(json, "\"exit-crossing\"");
        let name: ScrollRangeName = serde_json::from_str("\"end\"").unwrap();
        assert_eq!(name, ScrollRangeName::End);
    }
}
