//! Fixed shift tables for the 8-hour and 12-hour roster regimes

use crate::models::clock::hm;
use crate::models::{EightHourShift, RosterType, Shift, TimePeriod, TwelveHourShift};

/// Clock time as (hour, minute)
type Clock = (u32, u32);

/// Catalog entry for one shift code
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftDefinition {
    pub code: &'static str,
    pub start: Clock,
    pub end: Clock,
    /// Scheduled hours as published on the roster
    pub total_hours: f64,
    pub breaks: &'static [(Clock, Clock)],
}

impl ShiftDefinition {
    /// Materialise the definition as a roster shift
    pub fn to_shift(&self) -> Shift {
        Shift {
            durations: vec![TimePeriod {
                start_time: hm(self.start.0, self.start.1),
                end_time: hm(self.end.0, self.end.1),
                total_hours: self.total_hours,
            }],
            breaks: self
                .breaks
                .iter()
                .map(|(start, end)| TimePeriod::between(hm(start.0, start.1), hm(end.0, end.1)))
                .collect(),
        }
    }
}

const EIGHT_N: ShiftDefinition = ShiftDefinition {
    code: "N",
    start: (0, 0),
    end: (9, 15),
    total_hours: 9.25,
    breaks: &[((6, 0), (6, 45))],
};

const EIGHT_M: ShiftDefinition = ShiftDefinition {
    code: "M",
    start: (8, 0),
    end: (17, 15),
    total_hours: 9.25,
    breaks: &[((12, 0), (12, 45))],
};

const EIGHT_A: ShiftDefinition = ShiftDefinition {
    code: "A",
    start: (15, 15),
    end: (0, 0),
    total_hours: 9.25,
    breaks: &[((18, 0), (18, 45))],
};

const EIGHT_OH: ShiftDefinition = ShiftDefinition {
    code: "OH",
    start: (8, 30),
    end: (17, 30),
    total_hours: 9.0,
    breaks: &[((12, 0), (12, 45))],
};

const TWELVE_A: ShiftDefinition = ShiftDefinition {
    code: "A",
    start: (8, 0),
    end: (19, 30),
    total_hours: 11.5,
    breaks: &[((12, 0), (12, 45))],
};

const TWELVE_BD: ShiftDefinition = ShiftDefinition {
    code: "B/D",
    start: (19, 0),
    end: (8, 30),
    total_hours: 13.5,
    breaks: &[((0, 30), (1, 15)), ((6, 0), (6, 45))],
};

const TWELVE_C: ShiftDefinition = ShiftDefinition {
    code: "C",
    start: (10, 0),
    end: (19, 0),
    total_hours: 9.0,
    breaks: &[((12, 0), (12, 45))],
};

const TWELVE_L: ShiftDefinition = ShiftDefinition {
    code: "L",
    start: (13, 0),
    end: (22, 0),
    total_hours: 9.0,
    breaks: &[((18, 0), (18, 45))],
};

impl EightHourShift {
    pub fn definition(self) -> &'static ShiftDefinition {
        match self {
            EightHourShift::N => &EIGHT_N,
            EightHourShift::M => &EIGHT_M,
            EightHourShift::A => &EIGHT_A,
            EightHourShift::OH => &EIGHT_OH,
        }
    }
}

impl TwelveHourShift {
    pub fn definition(self) -> &'static ShiftDefinition {
        match self {
            TwelveHourShift::A => &TWELVE_A,
            TwelveHourShift::BD => &TWELVE_BD,
            TwelveHourShift::C => &TWELVE_C,
            TwelveHourShift::L => &TWELVE_L,
        }
    }
}

/// Lookup of shift code to definition, per roster regime
pub struct ShiftCatalog;

impl ShiftCatalog {
    /// Definition for `code` in the catalog of `roster_type`
    pub fn definition(roster_type: RosterType, code: &str) -> Option<&'static ShiftDefinition> {
        match roster_type {
            RosterType::EightHour => code.parse::<EightHourShift>().ok().map(EightHourShift::definition),
            RosterType::TwelveHour => code
                .parse::<TwelveHourShift>()
                .ok()
                .map(TwelveHourShift::definition),
        }
    }

    /// Shift for `code`, or `None` when the regime has no such code
    pub fn lookup(roster_type: RosterType, code: &str) -> Option<Shift> {
        Self::definition(roster_type, code).map(ShiftDefinition::to_shift)
    }

    /// All definitions of a regime, in catalog order
    pub fn definitions(roster_type: RosterType) -> [&'static ShiftDefinition; 4] {
        match roster_type {
            RosterType::EightHour => [&EIGHT_N, &EIGHT_M, &EIGHT_A, &EIGHT_OH],
            RosterType::TwelveHour => [&TWELVE_A, &TWELVE_BD, &TWELVE_C, &TWELVE_L],
        }
    }
}
