use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// Macro to generate a string-backed enum with serde renames matching the
/// store's wire strings, plus `as_str` + `std::str::FromStr`.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = StoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(StoreError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Role {
    Doctor => "doctor",
    Nurse => "nurse",
    Pharmacist => "pharmacist",
    Therapist => "therapist",
});

impl Role {
    /// All roles, in declaration order. Used by the seed generator.
    pub const ALL: [Role; 4] = [
        Role::Doctor,
        Role::Nurse,
        Role::Pharmacist,
        Role::Therapist,
    ];
}

str_enum!(EnrollmentStatus {
    Completed => "completed",
    InProgress => "in-progress",
    Dropped => "dropped",
});

str_enum!(OutcomeType {
    Knowledge => "knowledge",
    BehaviorChange => "behavior_change",
    PatientOutcome => "patient_outcome",
});

impl OutcomeType {
    pub const ALL: [OutcomeType; 3] = [
        OutcomeType::Knowledge,
        OutcomeType::BehaviorChange,
        OutcomeType::PatientOutcome,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn role_round_trip() {
        for (variant, s) in [
            (Role::Doctor, "doctor"),
            (Role::Nurse, "nurse"),
            (Role::Pharmacist, "pharmacist"),
            (Role::Therapist, "therapist"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(Role::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn enrollment_status_round_trip() {
        for (variant, s) in [
            (EnrollmentStatus::Completed, "completed"),
            (EnrollmentStatus::InProgress, "in-progress"),
            (EnrollmentStatus::Dropped, "dropped"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(EnrollmentStatus::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn outcome_type_round_trip() {
        for (variant, s) in [
            (OutcomeType::Knowledge, "knowledge"),
            (OutcomeType::BehaviorChange, "behavior_change"),
            (OutcomeType::PatientOutcome, "patient_outcome"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(OutcomeType::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn unknown_value_is_rejected() {
        let err = Role::from_str("janitor").unwrap_err();
        assert!(matches!(err, StoreError::InvalidEnum { .. }));
    }

    #[test]
    fn serde_uses_wire_strings() {
        // The serde representation must match what the store holds,
        // including the kebab-case in-progress status.
        assert_eq!(
            serde_json::to_string(&EnrollmentStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!(
            serde_json::to_string(&OutcomeType::BehaviorChange).unwrap(),
            "\"behavior_change\""
        );
        let role: Role = serde_json::from_str("\"nurse\"").unwrap();
        assert_eq!(role, Role::Nurse);
    }
}
