use std::{fmt, str::FromStr};

use thiserror::Error;

/// Every recognized update operator keyword
pub const UPDATE_OPERATORS: [&str; 14] = [
    "set",
    "unset",
    "inc",
    "dec",
    "pop",
    "push",
    "push_all",
    "pull",
    "pull_all",
    "add_to_set",
    "set_on_insert",
    "min",
    "max",
    "rename",
];

/// Returned when a keyword is not one of `UPDATE_OPERATORS`
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown update operator `{0}`")]
pub struct UnknownOperator(pub String);

/// Modifier keywords accepted when building update documents
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum UpdateOperator {
    Set,
    Unset,
    Inc,
    Dec,
    Pop,
    Push,
    PushAll,
    Pull,
    PullAll,
    AddToSet,
    SetOnInsert,
    Min,
    Max,
    Rename,
}

impl UpdateOperator {
    /// All operators, in the same order as `UPDATE_OPERATORS`
    pub const ALL: [UpdateOperator; 14] = [
        UpdateOperator::Set,
        UpdateOperator::Unset,
        UpdateOperator::Inc,
        UpdateOperator::Dec,
        UpdateOperator::Pop,
        UpdateOperator::Push,
        UpdateOperator::PushAll,
        UpdateOperator::Pull,
        UpdateOperator::PullAll,
        UpdateOperator::AddToSet,
        UpdateOperator::SetOnInsert,
        UpdateOperator::Min,
        UpdateOperator::Max,
        UpdateOperator::Rename,
    ];

    /// The keyword as written by callers, eg. `add_to_set`
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateOperator::Set => "set",
            UpdateOperator::Unset => "unset",
            UpdateOperator::Inc => "inc",
            UpdateOperator::Dec => "dec",
            UpdateOperator::Pop => "pop",
            UpdateOperator::Push => "push",
            UpdateOperator::PushAll => "push_all",
            UpdateOperator::Pull => "pull",
            UpdateOperator::PullAll => "pull_all",
            UpdateOperator::AddToSet => "add_to_set",
            UpdateOperator::SetOnInsert => "set_on_insert",
            UpdateOperator::Min => "min",
            UpdateOperator::Max => "max",
            UpdateOperator::Rename => "rename",
        }
    }

    /// The storage-level modifier this keyword is sent as
    pub fn modifier(&self) -> &'static str {
        match self {
            UpdateOperator::Set => "$set",
            UpdateOperator::Unset => "$unset",
            UpdateOperator::Inc | UpdateOperator::Dec => "$inc",
            UpdateOperator::Pop => "$pop",
            UpdateOperator::Push | UpdateOperator::PushAll => "$push",
            UpdateOperator::Pull => "$pull",
            UpdateOperator::PullAll => "$pullAll",
            UpdateOperator::AddToSet => "$addToSet",
            UpdateOperator::SetOnInsert => "$setOnInsert",
            UpdateOperator::Min => "$min",
            UpdateOperator::Max => "$max",
            UpdateOperator::Rename => "$rename",
        }
    }

    /// `dec` is sent as `$inc` with the value negated
    pub fn negates_value(&self) -> bool {
        matches!(self, UpdateOperator::Dec)
    }

    /// `push_all` is sent as `$push` with the values wrapped in `$each`
    pub fn wraps_each(&self) -> bool {
        matches!(self, UpdateOperator::PushAll)
    }
}

impl fmt::Display for UpdateOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UpdateOperator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UpdateOperator::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| UnknownOperator(s.to_string()))
    }
}

/// Returns true if `keyword` is a recognized update operator
pub fn is_update_operator(keyword: &str) -> bool {
    UPDATE_OPERATORS.contains(&keyword)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_match_enum() {
        for (op, keyword) in UpdateOperator::ALL.iter().zip(UPDATE_OPERATORS) {
            assert_eq!(op.as_str(), keyword);
            assert_eq!(keyword.parse::<UpdateOperator>(), Ok(*op));
            assert!(is_update_operator(keyword));
        }
    }

    #[test]
    fn unknown_keywords() {
        assert!(!is_update_operator("inc_by"));
        assert!(!is_update_operator("$set"));
        assert!(!is_update_operator("Set"));
        assert_eq!(
            "upsert".parse::<UpdateOperator>(),
            Err(UnknownOperator("upsert".to_string()))
        );
    }

    #[test]
    fn modifiers() {
        assert_eq!(UpdateOperator::Dec.modifier(), "$inc");
        assert!(UpdateOperator::Dec.negates_value());
        assert!(!UpdateOperator::Inc.negates_value());
        assert_eq!(UpdateOperator::PushAll.modifier(), "$push");
        assert!(UpdateOperator::PushAll.wraps_each());
        assert_eq!(UpdateOperator::AddToSet.modifier(), "$addToSet");
        assert_eq!(UpdateOperator::SetOnInsert.to_string(), "set_on_insert");
    }

    #[cfg(feature = "json")]
    #[test]
    fn operator_json() {
        let json = serde_json::to_string(&UpdateOperator::AddToSet).unwrap();
        assert_eq!(json, "\"add_to_set\"");
        let op: UpdateOperator = serde_json::from_str("\"pull_all\"").unwrap();
        assert_eq!(op, UpdateOperator::PullAll);
    }
}
