//! Closed enumerations carried by Liberty attributes.
//!
//! Each enumeration is matched by exact spelling: `generic-cmos` or
//! `GENERIC_CMOS` are not `generic_cmos`.

use std::fmt;

/// An enumeration read from a fixed set of Liberty keywords.
pub trait Keyword: Sized + Copy + 'static {
    /// Accepted spellings, in the order they are listed in messages.
    const SPELLINGS: &'static [(&'static str, Self)];

    /// Look up a keyword by its exact spelling.
    fn from_keyword(text: &str) -> Option<Self> {
        Self::SPELLINGS
            .iter()
            .find(|(spelling, _)| *spelling == text)
            .map(|(_, value)| *value)
    }

    /// The accepted spellings formatted for an error message,
    /// e.g. `'cmos' or 'fpga'`.
    fn accepted() -> String {
        let quoted: Vec<String> = Self::SPELLINGS.iter().map(|(s, _)| format!("'{}'", s)).collect();
        match quoted.split_last() {
            Some((last, [])) => last.clone(),
            Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
            None => String::new(),
        }
    }
}

macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $text:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// The Liberty spelling.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl Keyword for $name {
            const SPELLINGS: &'static [(&'static str, Self)] = &[$(($text, $name::$variant),)+];
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

keyword_enum! {
    /// Value of `technology`.
    pub enum Technology {
        Cmos => "cmos",
        Fpga => "fpga",
    }
}

keyword_enum! {
    /// Value of `delay_model`.
    pub enum DelayModel {
        GenericCmos => "generic_cmos",
        TableLookup => "table_lookup",
        PiecewiseCmos => "piecewise_cmos",
        Cmos2 => "cmos2",
        Dcm => "dcm",
    }
}

keyword_enum! {
    /// Value of a pin's `direction`.
    pub enum Direction {
        Input => "input",
        Output => "output",
        Inout => "inout",
        Internal => "internal",
    }
}

keyword_enum! {
    /// Value of `timing_sense`.
    pub enum TimingSense {
        PositiveUnate => "positive_unate",
        NegativeUnate => "negative_unate",
        NonUnate => "non_unate",
    }
}

keyword_enum! {
    /// Value of `timing_type`.
    pub enum TimingType {
        Combinational => "combinational",
        CombinationalRise => "combinational_rise",
        CombinationalFall => "combinational_fall",
        ThreeStateEnable => "three_state_enable",
        ThreeStateEnableRise => "three_state_enable_rise",
        ThreeStateEnableFall => "three_state_enable_fall",
        ThreeStateDisable => "three_state_disable",
        ThreeStateDisableRise => "three_state_disable_rise",
        ThreeStateDisableFall => "three_state_disable_fall",
        RisingEdge => "rising_edge",
        FallingEdge => "falling_edge",
        Preset => "preset",
        Clear => "clear",
        HoldRising => "hold_rising",
        HoldFalling => "hold_falling",
        SetupRising => "setup_rising",
        SetupFalling => "setup_falling",
        RecoveryRising => "recovery_rising",
        RecoveryFalling => "recovery_falling",
        SkewRising => "skew_rising",
        SkewFalling => "skew_falling",
        RemovalRising => "removal_rising",
        RemovalFalling => "removal_falling",
        NonSeqSetupRising => "non_seq_setup_rising",
        NonSeqSetupFalling => "non_seq_setup_falling",
        NonSeqHoldRising => "non_seq_hold_rising",
        NonSeqHoldFalling => "non_seq_hold_falling",
        NochangeHighHigh => "nochange_high_high",
        NochangeHighLow => "nochange_high_low",
        NochangeLowHigh => "nochange_low_high",
        NochangeLowLow => "nochange_low_low",
    }
}

keyword_enum! {
    /// Value of a table template's `variable_1`, `variable_2` or `variable_3`.
    pub enum VarType {
        InputNetTransition => "input_net_transition",
        TotalOutputNetCapacitance => "total_output_net_capacitance",
        EqualOrOppositeOutputNetCapacitance => "equal_or_opposite_output_net_capacitance",
        InputTransitionTime => "input_transition_time",
        OutputNetLength => "output_net_length",
        OutputNetWireCap => "output_net_wire_cap",
        OutputNetPinCap => "output_net_pin_cap",
        RelatedOutTotalOutputNetCapacitance => "related_out_total_output_net_capacitance",
        RelatedOutOutputNetLength => "related_out_output_net_length",
        RelatedOutOutputNetWireCap => "related_out_output_net_wire_cap",
        RelatedOutOutputNetPinCap => "related_out_output_net_pin_cap",
        ConstrainedPinTransition => "constrained_pin_transition",
        RelatedPinTransition => "related_pin_transition",
    }
}
