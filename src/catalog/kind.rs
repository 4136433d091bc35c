//! The attribute name table.

use std::fmt;

macro_rules! attr_kinds {
    ($($variant:ident => $name:literal,)+) => {
        /// Every Liberty attribute and group name the parser understands.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum AttrKind {
            $($variant,)+
        }

        impl AttrKind {
            /// All kinds, in declaration order.
            pub const ALL: &'static [AttrKind] = &[$(AttrKind::$variant,)+];

            /// The name as written in Liberty source.
            pub fn name(self) -> &'static str {
                match self {
                    $(AttrKind::$variant => $name,)+
                }
            }

            /// Look up an attribute by name. Names are case sensitive.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(AttrKind::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

attr_kinds! {
    Area => "area",
    AuxiliaryPadCell => "auxiliary_pad_cell",
    BaseName => "base_name",
    BaseType => "base_type",
    BitFrom => "bit_from",
    BitTo => "bit_to",
    BitWidth => "bit_width",
    Bundle => "bundle",
    Bus => "bus",
    BusNamingStyle => "bus_naming_style",
    BusType => "bus_type",
    CalcMode => "calc_mode",
    Capacitance => "capacitance",
    CapacitiveLoadUnit => "capacitive_load_unit",
    Cell => "cell",
    CellFall => "cell_fall",
    CellFootprint => "cell_footprint",
    CellLeakagePower => "cell_leakage_power",
    CellRise => "cell_rise",
    Clear => "clear",
    ClearPresetVar1 => "clear_preset_var1",
    ClearPresetVar2 => "clear_preset_var2",
    Clock => "clock",
    ClockGateClockPin => "clock_gate_clock_pin",
    ClockGateEnablePin => "clock_gate_enable_pin",
    ClockGatingIntegratedCell => "clock_gating_integrated_cell",
    ClockedOn => "clocked_on",
    ClockedOnAlso => "clocked_on_also",
    Coefs => "coefs",
    Comment => "comment",
    ContentionCondition => "contention_condition",
    CurrentUnit => "current_unit",
    DataIn => "data_in",
    DataType => "data_type",
    Date => "date",
    DefaultCellLeakagePower => "default_cell_leakage_power",
    DefaultFanoutLoad => "default_fanout_load",
    DefaultInoutPinCap => "default_inout_pin_cap",
    DefaultInputPinCap => "default_input_pin_cap",
    DefaultIntrinsicFall => "default_intrinsic_fall",
    DefaultIntrinsicRise => "default_intrinsic_rise",
    DefaultLeakagePowerDensity => "default_leakage_power_density",
    DefaultMaxCapacitance => "default_max_capacitance",
    DefaultMaxFanout => "default_max_fanout",
    DefaultMaxTransition => "default_max_transition",
    DefaultOperatingConditions => "default_operating_conditions",
    DefaultOutputPinCap => "default_output_pin_cap",
    DefaultPart => "default_part",
    DefaultSlopeFall => "default_slope_fall",
    DefaultSlopeRise => "default_slope_rise",
    DefaultWireLoad => "default_wire_load",
    DefaultWireLoadArea => "default_wire_load_area",
    DefaultWireLoadCapacitance => "default_wire_load_capacitance",
    DefaultWireLoadMode => "default_wire_load_mode",
    DefaultWireLoadResistance => "default_wire_load_resistance",
    DefaultWireLoadSelection => "default_wire_load_selection",
    Define => "define",
    DefineCellArea => "define_cell_area",
    DefineGroup => "define_group",
    DelayModel => "delay_model",
    Direction => "direction",
    Domain => "domain",
    DontFault => "dont_fault",
    DontTouch => "dont_touch",
    DontUse => "dont_use",
    Downto => "downto",
    DriveCurrent => "drive_current",
    DriverType => "driver_type",
    EdifName => "edif_name",
    EmTempDegradationFactor => "em_temp_degradation_factor",
    Enable => "enable",
    EnableAlso => "enable_also",
    EqualOrOppositeOutput => "equal_or_opposite_output",
    FallCapacitance => "fall_capacitance",
    FallCapacitanceRange => "fall_capacitance_range",
    FallConstraint => "fall_constraint",
    FallCurrentSlopeAfterThreshold => "fall_current_slope_after_threshold",
    FallCurrentSlopeBeforeThreshold => "fall_current_slope_before_threshold",
    FallDelayIntercept => "fall_delay_intercept",
    FallPinResistance => "fall_pin_resistance",
    FallPower => "fall_power",
    FallPropagation => "fall_propagation",
    FallResistance => "fall_resistance",
    FallTimeAfterThreshold => "fall_time_after_threshold",
    FallTimeBeforeThreshold => "fall_time_before_threshold",
    FallTransition => "fall_transition",
    FallingTogetherGroup => "falling_together_group",
    FanoutLength => "fanout_length",
    FanoutLoad => "fanout_load",
    Ff => "ff",
    FfBank => "ff_bank",
    Function => "function",
    HandleNegativeConstraint => "handle_negative_constraint",
    HasBuiltinPad => "has_builtin_pad",
    Hysteresis => "hysteresis",
    InPlaceSwapMode => "in_place_swap_mode",
    Index1 => "index_1",
    Index2 => "index_2",
    Index3 => "index_3",
    InputMap => "input_map",
    InputSignalLevel => "input_signal_level",
    InputThresholdPctFall => "input_threshold_pct_fall",
    InputThresholdPctRise => "input_threshold_pct_rise",
    InputVoltage => "input_voltage",
    InterfaceTiming => "interface_timing",
    InternalNode => "internal_node",
    InternalPower => "internal_power",
    IntrinsicFall => "intrinsic_fall",
    IntrinsicRise => "intrinsic_rise",
    InvertedOutput => "inverted_output",
    IoType => "io_type",
    IsClockGatingCell => "is_clock_gating_cell",
    IsPad => "is_pad",
    KProcessCellFall => "k_process_cell_fall",
    KProcessCellLeakagePower => "k_process_cell_leakage_power",
    KProcessCellRise => "k_process_cell_rise",
    KProcessFallTransition => "k_process_fall_transition",
    KProcessInternalPower => "k_process_internal_power",
    KProcessPinCap => "k_process_pin_cap",
    KProcessRiseTransition => "k_process_rise_transition",
    KTempCellFall => "k_temp_cell_fall",
    KTempCellLeakagePower => "k_temp_cell_leakage_power",
    KTempCellRise => "k_temp_cell_rise",
    KTempFallTransition => "k_temp_fall_transition",
    KTempInternalPower => "k_temp_internal_power",
    KTempPinCap => "k_temp_pin_cap",
    KTempRiseTransition => "k_temp_rise_transition",
    KVoltCellFall => "k_volt_cell_fall",
    KVoltCellLeakagePower => "k_volt_cell_leakage_power",
    KVoltCellRise => "k_volt_cell_rise",
    KVoltFallTransition => "k_volt_fall_transition",
    KVoltInternalPower => "k_volt_internal_power",
    KVoltPinCap => "k_volt_pin_cap",
    KVoltRiseTransition => "k_volt_rise_transition",
    Latch => "latch",
    LatchBank => "latch_bank",
    LeakagePower => "leakage_power",
    LeakagePowerUnit => "leakage_power_unit",
    Library => "library",
    LibraryFeatures => "library_features",
    LuTableTemplate => "lu_table_template",
    MapOnly => "map_only",
    MaxCapacitance => "max_capacitance",
    MaxFanout => "max_fanout",
    MaxTransition => "max_transition",
    Members => "members",
    MinCapacitance => "min_capacitance",
    MinFanout => "min_fanout",
    MinPeriod => "min_period",
    MinPulseWidthHigh => "min_pulse_width_high",
    MinPulseWidthLow => "min_pulse_width_low",
    MinTransition => "min_transition",
    Mode => "mode",
    MulticellPadPin => "multicell_pad_pin",
    NextState => "next_state",
    NextstateType => "nextstate_type",
    NomProcess => "nom_process",
    NomTemperature => "nom_temperature",
    NomVoltage => "nom_voltage",
    OperatingConditions => "operating_conditions",
    Orders => "orders",
    OutputCurrentTemplate => "output_current_template",
    OutputSignalLevel => "output_signal_level",
    OutputThresholdPctFall => "output_threshold_pct_fall",
    OutputThresholdPctRise => "output_threshold_pct_rise",
    OutputVoltage => "output_voltage",
    PadCell => "pad_cell",
    PadType => "pad_type",
    PieceDefine => "piece_define",
    PieceType => "piece_type",
    Pin => "pin",
    PinEqual => "pin_equal",
    PinFuncType => "pin_func_type",
    PinOpposite => "pin_opposite",
    Power => "power",
    PowerCellType => "power_cell_type",
    PowerLevel => "power_level",
    PowerLutTemplate => "power_lut_template",
    PowerModel => "power_model",
    PowerRail => "power_rail",
    Preferred => "preferred",
    PreferTied => "prefer_tied",
    Preset => "preset",
    PrimaryOutput => "primary_output",
    Process => "process",
    PullingCurrent => "pulling_current",
    PullingResistance => "pulling_resistance",
    PullingResistanceUnit => "pulling_resistance_unit",
    RailConnection => "rail_connection",
    RelatedBusPins => "related_bus_pins",
    RelatedGroundPin => "related_ground_pin",
    RelatedOutputPin => "related_output_pin",
    RelatedPgPin => "related_pg_pin",
    RelatedPin => "related_pin",
    RelatedPowerPin => "related_power_pin",
    Resistance => "resistance",
    ResourceUsage => "resource_usage",
    RetainFallSlew => "retain_fall_slew",
    RetainRiseSlew => "retain_rise_slew",
    RetainingFall => "retaining_fall",
    RetainingRise => "retaining_rise",
    Revision => "revision",
    RiseCapacitance => "rise_capacitance",
    RiseCapacitanceRange => "rise_capacitance_range",
    RiseConstraint => "rise_constraint",
    RiseCurrentSlopeAfterThreshold => "rise_current_slope_after_threshold",
    RiseCurrentSlopeBeforeThreshold => "rise_current_slope_before_threshold",
    RiseDelayIntercept => "rise_delay_intercept",
    RisePinResistance => "rise_pin_resistance",
    RisePower => "rise_power",
    RisePropagation => "rise_propagation",
    RiseResistance => "rise_resistance",
    RiseTimeAfterThreshold => "rise_time_after_threshold",
    RiseTimeBeforeThreshold => "rise_time_before_threshold",
    RiseTransition => "rise_transition",
    RisingTogetherGroup => "rising_together_group",
    RoutingLayers => "routing_layers",
    ScalingFactors => "scaling_factors",
    SdfCond => "sdf_cond",
    SdfCondEnd => "sdf_cond_end",
    SdfCondStart => "sdf_cond_start",
    SdfEdges => "sdf_edges",
    SignalType => "signal_type",
    Simulation => "simulation",
    SingleBitDegenerate => "single_bit_degenerate",
    Slope => "slope",
    SlopeFall => "slope_fall",
    SlopeRise => "slope_rise",
    SlewControl => "slew_control",
    SlewDerateFromLibrary => "slew_derate_from_library",
    SlewLowerThresholdPctFall => "slew_lower_threshold_pct_fall",
    SlewLowerThresholdPctRise => "slew_lower_threshold_pct_rise",
    SlewType => "slew_type",
    SlewUpperThresholdPctFall => "slew_upper_threshold_pct_fall",
    SlewUpperThresholdPctRise => "slew_upper_threshold_pct_rise",
    StateFunction => "state_function",
    Statetable => "statetable",
    SwitchCellType => "switch_cell_type",
    SwitchingInterval => "switching_interval",
    SwitchingTogetherGroup => "switching_together_group",
    Table => "table",
    Technology => "technology",
    Temperature => "temperature",
    TestCell => "test_cell",
    TestOutputOnly => "test_output_only",
    ThreeState => "three_state",
    ThresholdVoltageGroup => "threshold_voltage_group",
    TimeUnit => "time_unit",
    Timing => "timing",
    TimingModelType => "timing_model_type",
    TimingSense => "timing_sense",
    TimingType => "timing_type",
    TreeType => "tree_type",
    Type => "type",
    UseForSizeOnly => "use_for_size_only",
    Value => "value",
    Values => "values",
    Variable1 => "variable_1",
    Variable1Range => "variable_1_range",
    Variable2 => "variable_2",
    Variable2Range => "variable_2_range",
    Variable3 => "variable_3",
    Variable3Range => "variable_3_range",
    VhdlName => "vhdl_name",
    Vih => "vih",
    Vil => "vil",
    Vimax => "vimax",
    Vimin => "vimin",
    Voh => "voh",
    Vol => "vol",
    Voltage => "voltage",
    VoltageMap => "voltage_map",
    VoltageUnit => "voltage_unit",
    Vomax => "vomax",
    Vomin => "vomin",
    When => "when",
    WhenEnd => "when_end",
    WhenStart => "when_start",
    WireLoad => "wire_load",
    WireLoadFromArea => "wire_load_from_area",
    WireLoadSelection => "wire_load_selection",
    WireLoadTable => "wire_load_table",
    XFunction => "x_function",
}

impl fmt::Display for AttrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lookup() {
        assert_eq!(AttrKind::from_name("cell_rise"), Some(AttrKind::CellRise));
        assert_eq!(AttrKind::from_name("simulation"), Some(AttrKind::Simulation));
        assert_eq!(AttrKind::from_name("Cell_Rise"), None);
        assert_eq!(AttrKind::from_name("no_such_attribute"), None);
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<&str> = AttrKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), AttrKind::ALL.len());
    }
}
