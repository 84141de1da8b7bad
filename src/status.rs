//! Status enums and their transition tables.
//!
//! Each entity owns its own closed status set. A status change is only valid
//! when the `(source, target)` pair appears in that status type's table;
//! everything else is rejected and the caller keeps the old value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rejected status change
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("cannot change {kind} status from '{from}' to '{to}'")]
    NotAllowed {
        kind: &'static str,
        from: String,
        to: String,
    },

    #[error("unknown {kind} status '{value}'")]
    UnknownStatus { kind: &'static str, value: String },
}

/// A closed status set with an explicit transition table.
pub trait StatusMachine: Copy + Eq + fmt::Debug + 'static {
    /// Entity name used in error messages
    const KIND: &'static str;

    /// Every status, in declaration order
    fn all() -> &'static [Self];

    /// Allowed `(source, target)` pairs
    fn transitions() -> &'static [(Self, Self)];

    /// Wire/display label of this status
    fn label(self) -> &'static str;

    fn can_transition_to(self, target: Self) -> bool {
        Self::transitions()
            .iter()
            .any(|&(from, to)| from == self && to == target)
    }

    /// Statuses reachable from `self` in one step
    fn targets(self) -> Vec<Self> {
        Self::transitions()
            .iter()
            .filter(|(from, _)| *from == self)
            .map(|&(_, to)| to)
            .collect()
    }

    /// True when no transition leaves this status
    fn is_terminal(self) -> bool {
        self.targets().is_empty()
    }

    /// Parse a label, case-insensitively
    fn parse_label(value: &str) -> Result<Self, TransitionError> {
        let wanted = value.trim();
        Self::all()
            .iter()
            .copied()
            .find(|status| status.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TransitionError::UnknownStatus {
                kind: Self::KIND,
                value: value.to_string(),
            })
    }
}

/// Check a status change against `S`'s table and return the new status.
pub fn transition<S: StatusMachine>(from: S, to: S) -> Result<S, TransitionError> {
    if from.can_transition_to(to) {
        Ok(to)
    } else {
        Err(TransitionError::NotAllowed {
            kind: S::KIND,
            from: from.label().to_string(),
            to: to.label().to_string(),
        })
    }
}

/// Apply a status change in place; `current` is untouched on error.
pub fn apply<S: StatusMachine>(current: &mut S, to: S) -> Result<(), TransitionError> {
    *current = transition(*current, to)?;
    Ok(())
}

macro_rules! status_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
        transitions: [$(($from:ident, $to:ident)),* $(,)?]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant),+
        }

        impl StatusMachine for $name {
            const KIND: &'static str = $kind;

            fn all() -> &'static [Self] {
                &[$($name::$variant),+]
            }

            fn transitions() -> &'static [(Self, Self)] {
                &[$(($name::$from, $name::$to)),*]
            }

            fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::all()[0]
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = TransitionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse_label(s)
            }
        }

        impl Serialize for $name {
            fn serialize<Ser: serde::Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Self::parse_label(&raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

status_enum! {
    /// Admin-managed account state
    UserStatus, "user" {
        Pending => "Pending",
        Active => "Active",
        NotVerified => "Not Verified",
        Deactivated => "Deactivated",
    }
    transitions: [
        (Pending, Active),
        (Pending, NotVerified),
        (NotVerified, Active),
        (Active, Deactivated),
        (Deactivated, Active),
    ]
}

status_enum! {
    /// Moderation state of a property listing
    PropertyStatus, "property" {
        Pending => "pending",
        Published => "published",
        Rejected => "rejected",
    }
    transitions: [
        (Pending, Published),
        (Pending, Rejected),
    ]
}

status_enum! {
    TaskStatus, "task" {
        Pending => "Pending",
        Completed => "Completed",
    }
    transitions: [
        (Pending, Completed),
    ]
}

status_enum! {
    MeetingStatus, "meeting" {
        Scheduled => "Scheduled",
        Completed => "Completed",
        Cancelled => "Cancelled",
    }
    transitions: [
        (Scheduled, Completed),
        (Scheduled, Cancelled),
    ]
}

status_enum! {
    /// Sales funnel position of a lead
    LeadStatus, "lead" {
        New => "New",
        Contacted => "Contacted",
        Interested => "Interested",
        Converted => "Converted",
        Lost => "Lost",
    }
    transitions: [
        (New, Contacted),
        (New, Lost),
        (Contacted, Interested),
        (Contacted, Lost),
        (Interested, Converted),
        (Interested, Lost),
    ]
}

status_enum! {
    DealStage, "deal" {
        Negotiation => "Negotiation",
        Agreement => "Agreement",
        Closed => "Closed",
        Dropped => "Dropped",
    }
    transitions: [
        (Negotiation, Agreement),
        (Negotiation, Dropped),
        (Agreement, Closed),
        (Agreement, Dropped),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_through_parse() {
        for status in UserStatus::all() {
            assert_eq!(UserStatus::parse_label(status.label()).unwrap(), *status);
        }
        assert_eq!("not verified".parse::<UserStatus>().unwrap(), UserStatus::NotVerified);
    }

    #[test]
    fn test_self_transition_is_rejected() {
        assert!(transition(TaskStatus::Pending, TaskStatus::Pending).is_err());
    }
}
