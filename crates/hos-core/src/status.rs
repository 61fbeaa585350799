//! Duty status tags, as recorded on a driver's log.

use std::fmt;

/// One of the four duty statuses a schedule period can carry.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DutyStatus {
    Driving,
    OnDutyNotDriving,
    OffDuty,
    SleeperBerth,
}

impl DutyStatus {
    /// All statuses in log-sheet order.
    pub const ALL: [DutyStatus; 4] = [
        DutyStatus::OffDuty,
        DutyStatus::SleeperBerth,
        DutyStatus::Driving,
        DutyStatus::OnDutyNotDriving,
    ];

    /// Stable wire name, identical to the serde representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            DutyStatus::Driving          => "Driving",
            DutyStatus::OnDutyNotDriving => "OnDutyNotDriving",
            DutyStatus::OffDuty          => "OffDuty",
            DutyStatus::SleeperBerth     => "SleeperBerth",
        }
    }

    /// `true` for statuses that count against the on-duty window.
    #[inline]
    pub const fn is_on_duty(self) -> bool {
        matches!(self, DutyStatus::Driving | DutyStatus::OnDutyNotDriving)
    }
}

impl fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
