//! Group tables.
//!
//! One [`GroupHandler`] per kind of group. Groups that share a body layout
//! share a table: every lookup-table group (`cell_rise`, `rise_power`, ...)
//! uses [`TABLE`], every template group uses [`TEMPLATE`].

use super::handler::{GroupBuilder, GroupHandler, Rule};
use super::kind::AttrKind as K;
use crate::syntax::header as h;
use crate::syntax::ValueReader as R;

type CheckResult = std::result::Result<(), String>;

pub static LIBRARY: GroupHandler = GroupHandler {
    name: "library",
    header: &h::STR,
    rules: &[
        Rule::complex(K::Technology, &h::TECHNOLOGY),
        Rule::simple(K::DelayModel, R::DelayModel),
        Rule::simple(K::BusNamingStyle, R::Str),
        Rule::simple(K::Comment, R::Str),
        Rule::simple(K::CurrentUnit, R::Str),
        Rule::simple(K::Date, R::Str),
        Rule::simple(K::DefaultOperatingConditions, R::Str),
        Rule::simple(K::DefaultWireLoad, R::Str),
        Rule::simple(K::DefaultWireLoadMode, R::Str),
        Rule::simple(K::DefaultWireLoadSelection, R::Str),
        Rule::simple(K::InPlaceSwapMode, R::Str),
        Rule::simple(K::LeakagePowerUnit, R::Str),
        Rule::simple(K::PieceType, R::Str),
        Rule::simple(K::PowerModel, R::Str),
        Rule::simple(K::PullingResistanceUnit, R::Str),
        Rule::simple(K::Revision, R::Str),
        Rule::simple(K::TimeUnit, R::Str),
        Rule::simple(K::VoltageUnit, R::Str),
        Rule::simple(K::Simulation, R::Bool),
        Rule::simple(K::DefaultCellLeakagePower, R::Float),
        Rule::simple(K::DefaultFanoutLoad, R::Float),
        Rule::simple(K::DefaultInoutPinCap, R::Float),
        Rule::simple(K::DefaultInputPinCap, R::Float),
        Rule::simple(K::DefaultIntrinsicFall, R::Float),
        Rule::simple(K::DefaultIntrinsicRise, R::Float),
        Rule::simple(K::DefaultLeakagePowerDensity, R::Float),
        Rule::simple(K::DefaultMaxCapacitance, R::Float),
        Rule::simple(K::DefaultMaxFanout, R::Float),
        Rule::simple(K::DefaultMaxTransition, R::Float),
        Rule::simple(K::DefaultOutputPinCap, R::Float),
        Rule::simple(K::DefaultSlopeFall, R::Float),
        Rule::simple(K::DefaultSlopeRise, R::Float),
        Rule::simple(K::DefaultWireLoadArea, R::Float),
        Rule::simple(K::DefaultWireLoadCapacitance, R::Float),
        Rule::simple(K::DefaultWireLoadResistance, R::Float),
        Rule::simple(K::EmTempDegradationFactor, R::Float),
        Rule::simple(K::InputThresholdPctFall, R::Float),
        Rule::simple(K::InputThresholdPctRise, R::Float),
        Rule::simple(K::NomProcess, R::Float),
        Rule::simple(K::NomTemperature, R::Float),
        Rule::simple(K::NomVoltage, R::Float),
        Rule::simple(K::OutputThresholdPctFall, R::Float),
        Rule::simple(K::OutputThresholdPctRise, R::Float),
        Rule::simple(K::SlewDerateFromLibrary, R::Float),
        Rule::simple(K::SlewLowerThresholdPctFall, R::Float),
        Rule::simple(K::SlewLowerThresholdPctRise, R::Float),
        Rule::simple(K::SlewUpperThresholdPctFall, R::Float),
        Rule::simple(K::SlewUpperThresholdPctRise, R::Float),
        Rule::simple(K::KProcessCellFall, R::Float),
        Rule::simple(K::KProcessCellLeakagePower, R::Float),
        Rule::simple(K::KProcessCellRise, R::Float),
        Rule::simple(K::KProcessFallTransition, R::Float),
        Rule::simple(K::KProcessInternalPower, R::Float),
        Rule::simple(K::KProcessPinCap, R::Float),
        Rule::simple(K::KProcessRiseTransition, R::Float),
        Rule::simple(K::KTempCellFall, R::Float),
        Rule::simple(K::KTempCellLeakagePower, R::Float),
        Rule::simple(K::KTempCellRise, R::Float),
        Rule::simple(K::KTempFallTransition, R::Float),
        Rule::simple(K::KTempInternalPower, R::Float),
        Rule::simple(K::KTempPinCap, R::Float),
        Rule::simple(K::KTempRiseTransition, R::Float),
        Rule::simple(K::KVoltCellFall, R::Float),
        Rule::simple(K::KVoltCellLeakagePower, R::Float),
        Rule::simple(K::KVoltCellRise, R::Float),
        Rule::simple(K::KVoltFallTransition, R::Float),
        Rule::simple(K::KVoltInternalPower, R::Float),
        Rule::simple(K::KVoltPinCap, R::Float),
        Rule::simple(K::KVoltRiseTransition, R::Float),
        Rule::complex(K::CapacitiveLoadUnit, &h::FLOAT_STR),
        Rule::complex(K::DefaultPart, &h::STR_STR),
        Rule::complex(K::Define, &h::STR_STR_STR).repeated(),
        Rule::complex(K::DefineCellArea, &h::STR_STR).repeated(),
        Rule::complex(K::DefineGroup, &h::STR_STR).repeated(),
        Rule::complex(K::LibraryFeatures, &h::STR_LIST),
        Rule::complex(K::PieceDefine, &h::STR),
        Rule::complex(K::RoutingLayers, &h::STR_LIST),
        Rule::complex(K::VoltageMap, &h::STR_FLOAT).repeated(),
        Rule::group(K::Cell, &CELL).repeated(),
        Rule::group(K::LuTableTemplate, &TEMPLATE).repeated(),
        Rule::group(K::PowerLutTemplate, &TEMPLATE).repeated(),
        Rule::group(K::OutputCurrentTemplate, &TEMPLATE).repeated(),
        Rule::group(K::OperatingConditions, &OPERATING_CONDITIONS).repeated(),
        Rule::group(K::WireLoad, &WIRE_LOAD).repeated(),
        Rule::group(K::WireLoadTable, &WIRE_LOAD_TABLE).repeated(),
        Rule::group(K::WireLoadSelection, &WIRE_LOAD_SELECTION).repeated(),
        Rule::group(K::InputVoltage, &INPUT_VOLTAGE).repeated(),
        Rule::group(K::OutputVoltage, &OUTPUT_VOLTAGE).repeated(),
        Rule::group(K::Type, &TYPE).repeated(),
    ],
    check: None,
};

pub static CELL: GroupHandler = GroupHandler {
    name: "cell",
    header: &h::STR,
    rules: &[
        Rule::simple(K::Area, R::Float),
        Rule::simple(K::CellLeakagePower, R::Float),
        Rule::simple(K::AuxiliaryPadCell, R::Bool),
        Rule::simple(K::DontTouch, R::Bool),
        Rule::simple(K::DontUse, R::Bool),
        Rule::simple(K::HandleNegativeConstraint, R::Bool),
        Rule::simple(K::InterfaceTiming, R::Bool),
        Rule::simple(K::IsClockGatingCell, R::Bool),
        Rule::simple(K::MapOnly, R::Bool),
        Rule::simple(K::PadCell, R::Bool),
        Rule::simple(K::Preferred, R::Bool),
        Rule::simple(K::UseForSizeOnly, R::Bool),
        Rule::simple(K::BaseName, R::Str),
        Rule::simple(K::CellFootprint, R::Str),
        Rule::simple(K::ClockGatingIntegratedCell, R::Str),
        Rule::simple(K::DontFault, R::Str),
        Rule::simple(K::EdifName, R::Str),
        Rule::simple(K::IoType, R::Str),
        Rule::simple(K::PadType, R::Str),
        Rule::simple(K::PowerCellType, R::Str),
        Rule::simple(K::ScalingFactors, R::Str),
        Rule::simple(K::SingleBitDegenerate, R::Str),
        Rule::simple(K::SlewType, R::Str),
        Rule::simple(K::SwitchCellType, R::Str),
        Rule::simple(K::ThresholdVoltageGroup, R::Str),
        Rule::simple(K::TimingModelType, R::Str),
        Rule::simple(K::VhdlName, R::Str),
        Rule::simple(K::ContentionCondition, R::Function),
        Rule::complex(K::PinOpposite, &h::STR_STR),
        Rule::complex(K::PinEqual, &h::STR_LIST),
        Rule::complex(K::RailConnection, &h::STR_STR).repeated(),
        Rule::complex(K::ResourceUsage, &h::STR_INT).repeated(),
        Rule::group(K::Pin, &PIN).repeated(),
        Rule::group(K::Bus, &BUS).repeated(),
        Rule::group(K::Bundle, &BUNDLE).repeated(),
        Rule::group(K::Ff, &FF),
        Rule::group(K::FfBank, &FF_BANK),
        Rule::group(K::Latch, &LATCH),
        Rule::group(K::LatchBank, &LATCH_BANK),
        Rule::group(K::Statetable, &STATETABLE),
        Rule::group(K::LeakagePower, &LEAKAGE_POWER).repeated(),
        Rule::group(K::TestCell, &TEST_CELL),
        Rule::group(K::Type, &TYPE).repeated(),
    ],
    check: None,
};

pub static PIN: GroupHandler = GroupHandler {
    name: "pin",
    header: &h::STR_LIST,
    rules: &[
        Rule::simple(K::Direction, R::Direction),
        Rule::simple(K::Capacitance, R::Float),
        Rule::simple(K::RiseCapacitance, R::Float),
        Rule::simple(K::FallCapacitance, R::Float),
        Rule::simple(K::DriveCurrent, R::Float),
        Rule::simple(K::FanoutLoad, R::Float),
        Rule::simple(K::MaxCapacitance, R::Float),
        Rule::simple(K::MinCapacitance, R::Float),
        Rule::simple(K::MaxFanout, R::Float),
        Rule::simple(K::MinFanout, R::Float),
        Rule::simple(K::MaxTransition, R::Float),
        Rule::simple(K::MinTransition, R::Float),
        Rule::simple(K::MinPeriod, R::Float),
        Rule::simple(K::MinPulseWidthHigh, R::Float),
        Rule::simple(K::MinPulseWidthLow, R::Float),
        Rule::simple(K::PullingCurrent, R::Float),
        Rule::simple(K::PullingResistance, R::Float),
        Rule::simple(K::RiseCurrentSlopeAfterThreshold, R::Float),
        Rule::simple(K::RiseCurrentSlopeBeforeThreshold, R::Float),
        Rule::simple(K::FallCurrentSlopeAfterThreshold, R::Float),
        Rule::simple(K::FallCurrentSlopeBeforeThreshold, R::Float),
        Rule::simple(K::RiseTimeAfterThreshold, R::Float),
        Rule::simple(K::RiseTimeBeforeThreshold, R::Float),
        Rule::simple(K::FallTimeAfterThreshold, R::Float),
        Rule::simple(K::FallTimeBeforeThreshold, R::Float),
        Rule::simple(K::Function, R::Function),
        Rule::simple(K::ThreeState, R::Function),
        Rule::simple(K::StateFunction, R::Function),
        Rule::simple(K::XFunction, R::Function),
        Rule::simple(K::Clock, R::Bool),
        Rule::simple(K::ClockGateClockPin, R::Bool),
        Rule::simple(K::ClockGateEnablePin, R::Bool),
        Rule::simple(K::HasBuiltinPad, R::Bool),
        Rule::simple(K::Hysteresis, R::Bool),
        Rule::simple(K::InvertedOutput, R::Bool),
        Rule::simple(K::IsPad, R::Bool),
        Rule::simple(K::MulticellPadPin, R::Bool),
        Rule::simple(K::PrimaryOutput, R::Bool),
        Rule::simple(K::TestOutputOnly, R::Bool),
        Rule::simple(K::DriverType, R::Str),
        Rule::simple(K::InputMap, R::Str),
        Rule::simple(K::InputSignalLevel, R::Str),
        Rule::simple(K::OutputSignalLevel, R::Str),
        Rule::simple(K::InternalNode, R::Str),
        Rule::simple(K::NextstateType, R::Str),
        Rule::simple(K::PinFuncType, R::Str),
        Rule::simple(K::PreferTied, R::Str),
        Rule::simple(K::RelatedGroundPin, R::Str),
        Rule::simple(K::RelatedPowerPin, R::Str),
        Rule::simple(K::SignalType, R::Str),
        Rule::simple(K::SlewControl, R::Str),
        Rule::complex(K::RiseCapacitanceRange, &h::FLOAT_FLOAT),
        Rule::complex(K::FallCapacitanceRange, &h::FLOAT_FLOAT),
        Rule::group(K::Timing, &TIMING).repeated(),
        Rule::group(K::InternalPower, &INTERNAL_POWER).repeated(),
    ],
    check: None,
};

pub static BUS: GroupHandler = GroupHandler {
    name: "bus",
    header: &h::STR,
    rules: &[
        Rule::simple(K::BusType, R::Str),
        Rule::simple(K::Direction, R::Direction),
        Rule::simple(K::Capacitance, R::Float),
        Rule::simple(K::MaxCapacitance, R::Float),
        Rule::simple(K::MaxFanout, R::Float),
        Rule::simple(K::MaxTransition, R::Float),
        Rule::simple(K::Function, R::Function),
        Rule::simple(K::ThreeState, R::Function),
        Rule::simple(K::RelatedGroundPin, R::Str),
        Rule::simple(K::RelatedPowerPin, R::Str),
        Rule::group(K::Pin, &PIN).repeated(),
        Rule::group(K::Timing, &TIMING).repeated(),
        Rule::group(K::InternalPower, &INTERNAL_POWER).repeated(),
    ],
    check: None,
};

pub static BUNDLE: GroupHandler = GroupHandler {
    name: "bundle",
    header: &h::STR,
    rules: &[
        Rule::complex(K::Members, &h::STR_LIST),
        Rule::simple(K::Direction, R::Direction),
        Rule::simple(K::Capacitance, R::Float),
        Rule::simple(K::Function, R::Function),
        Rule::simple(K::ThreeState, R::Function),
        Rule::group(K::Pin, &PIN).repeated(),
        Rule::group(K::Timing, &TIMING).repeated(),
        Rule::group(K::InternalPower, &INTERNAL_POWER).repeated(),
    ],
    check: None,
};

pub static TIMING: GroupHandler = GroupHandler {
    name: "timing",
    header: &h::EMPTY,
    rules: &[
        Rule::simple(K::RelatedPin, R::Str),
        Rule::simple(K::RelatedBusPins, R::StrVector),
        Rule::simple(K::RelatedOutputPin, R::Str),
        Rule::simple(K::TimingSense, R::TimingSense),
        Rule::simple(K::TimingType, R::TimingType),
        Rule::simple(K::When, R::Function),
        Rule::simple(K::WhenStart, R::Function),
        Rule::simple(K::WhenEnd, R::Function),
        Rule::simple(K::SdfCond, R::Str),
        Rule::simple(K::SdfCondStart, R::Str),
        Rule::simple(K::SdfCondEnd, R::Str),
        Rule::simple(K::SdfEdges, R::Str),
        Rule::simple(K::IntrinsicRise, R::Float),
        Rule::simple(K::IntrinsicFall, R::Float),
        Rule::simple(K::RiseResistance, R::Float),
        Rule::simple(K::FallResistance, R::Float),
        Rule::simple(K::RisePinResistance, R::Float),
        Rule::simple(K::FallPinResistance, R::Float),
        Rule::simple(K::SlopeRise, R::Float),
        Rule::simple(K::SlopeFall, R::Float),
        Rule::complex(K::RiseDelayIntercept, &h::INT_FLOAT).repeated(),
        Rule::complex(K::FallDelayIntercept, &h::INT_FLOAT).repeated(),
        Rule::complex(K::Mode, &h::STR_STR),
        Rule::group(K::CellRise, &TABLE),
        Rule::group(K::CellFall, &TABLE),
        Rule::group(K::RiseTransition, &TABLE),
        Rule::group(K::FallTransition, &TABLE),
        Rule::group(K::RisePropagation, &TABLE),
        Rule::group(K::FallPropagation, &TABLE),
        Rule::group(K::RiseConstraint, &TABLE),
        Rule::group(K::FallConstraint, &TABLE),
        Rule::group(K::RetainingRise, &TABLE),
        Rule::group(K::RetainingFall, &TABLE),
        Rule::group(K::RetainRiseSlew, &TABLE),
        Rule::group(K::RetainFallSlew, &TABLE),
    ],
    check: None,
};

pub static TABLE: GroupHandler = GroupHandler {
    name: "table",
    header: &h::STR,
    rules: &[
        Rule::complex(K::Index1, &h::FLOAT_VECTOR),
        Rule::complex(K::Index2, &h::FLOAT_VECTOR),
        Rule::complex(K::Index3, &h::FLOAT_VECTOR),
        Rule::complex(K::Values, &h::FLOAT_VECTOR_LIST),
        Rule::complex(K::Coefs, &h::FLOAT_VECTOR),
        Rule::complex(K::Orders, &h::INT_VECTOR),
        Rule::group(K::Domain, &DOMAIN).repeated(),
    ],
    check: Some(check_table),
};

pub static TEMPLATE: GroupHandler = GroupHandler {
    name: "template",
    header: &h::STR,
    rules: &[
        Rule::simple(K::Variable1, R::VarType),
        Rule::simple(K::Variable2, R::VarType),
        Rule::simple(K::Variable3, R::VarType),
        Rule::complex(K::Index1, &h::FLOAT_VECTOR),
        Rule::complex(K::Index2, &h::FLOAT_VECTOR),
        Rule::complex(K::Index3, &h::FLOAT_VECTOR),
        Rule::group(K::Domain, &DOMAIN).repeated(),
    ],
    check: Some(check_template),
};

pub static DOMAIN: GroupHandler = GroupHandler {
    name: "domain",
    header: &h::STR,
    rules: &[
        Rule::simple(K::CalcMode, R::Str),
        Rule::complex(K::Coefs, &h::FLOAT_VECTOR),
        Rule::complex(K::Orders, &h::INT_VECTOR),
        Rule::complex(K::Variable1Range, &h::FLOAT_FLOAT),
        Rule::complex(K::Variable2Range, &h::FLOAT_FLOAT),
        Rule::complex(K::Variable3Range, &h::FLOAT_FLOAT),
    ],
    check: Some(check_domain),
};

pub static INTERNAL_POWER: GroupHandler = GroupHandler {
    name: "internal_power",
    header: &h::EMPTY,
    rules: &[
        Rule::simple(K::RelatedPin, R::Str),
        Rule::simple(K::RelatedPgPin, R::Str),
        Rule::simple(K::When, R::Function),
        Rule::simple(K::EqualOrOppositeOutput, R::Str),
        Rule::simple(K::FallingTogetherGroup, R::Str),
        Rule::simple(K::RisingTogetherGroup, R::Str),
        Rule::simple(K::SwitchingTogetherGroup, R::Str),
        Rule::simple(K::SwitchingInterval, R::Float),
        Rule::simple(K::PowerLevel, R::Str),
        Rule::group(K::Power, &TABLE),
        Rule::group(K::RisePower, &TABLE),
        Rule::group(K::FallPower, &TABLE),
    ],
    check: None,
};

pub static LEAKAGE_POWER: GroupHandler = GroupHandler {
    name: "leakage_power",
    header: &h::EMPTY,
    rules: &[
        Rule::simple(K::PowerLevel, R::Str),
        Rule::simple(K::RelatedPgPin, R::Str),
        Rule::simple(K::When, R::Function),
        Rule::simple(K::Value, R::Float),
    ],
    check: None,
};

pub static FF: GroupHandler = GroupHandler {
    name: "ff",
    header: &h::STR_STR,
    rules: FF_RULES,
    check: None,
};

pub static FF_BANK: GroupHandler = GroupHandler {
    name: "ff_bank",
    header: &h::STR_STR_INT,
    rules: FF_RULES,
    check: None,
};

const FF_RULES: &[Rule] = &[
    Rule::simple(K::Clear, R::Function),
    Rule::simple(K::Preset, R::Function),
    Rule::simple(K::ClockedOn, R::Function),
    Rule::simple(K::ClockedOnAlso, R::Function),
    Rule::simple(K::NextState, R::Function),
    Rule::simple(K::ClearPresetVar1, R::Str),
    Rule::simple(K::ClearPresetVar2, R::Str),
];

pub static LATCH: GroupHandler = GroupHandler {
    name: "latch",
    header: &h::STR_STR,
    rules: LATCH_RULES,
    check: None,
};

pub static LATCH_BANK: GroupHandler = GroupHandler {
    name: "latch_bank",
    header: &h::STR_STR_INT,
    rules: LATCH_RULES,
    check: None,
};

const LATCH_RULES: &[Rule] = &[
    Rule::simple(K::Clear, R::Function),
    Rule::simple(K::Preset, R::Function),
    Rule::simple(K::DataIn, R::Function),
    Rule::simple(K::Enable, R::Function),
    Rule::simple(K::EnableAlso, R::Function),
    Rule::simple(K::ClearPresetVar1, R::Str),
    Rule::simple(K::ClearPresetVar2, R::Str),
];

pub static STATETABLE: GroupHandler = GroupHandler {
    name: "statetable",
    header: &h::STR_STR,
    rules: &[Rule::simple(K::Table, R::Str)],
    check: None,
};

pub static TEST_CELL: GroupHandler = GroupHandler {
    name: "test_cell",
    header: &h::EMPTY,
    rules: &[
        Rule::group(K::Pin, &PIN).repeated(),
        Rule::group(K::Ff, &FF),
        Rule::group(K::FfBank, &FF_BANK),
        Rule::group(K::Latch, &LATCH),
        Rule::group(K::LatchBank, &LATCH_BANK),
        Rule::group(K::Statetable, &STATETABLE),
    ],
    check: None,
};

pub static OPERATING_CONDITIONS: GroupHandler = GroupHandler {
    name: "operating_conditions",
    header: &h::STR,
    rules: &[
        Rule::simple(K::CalcMode, R::Str),
        Rule::simple(K::Process, R::Float),
        Rule::simple(K::Temperature, R::Float),
        Rule::simple(K::Voltage, R::Float),
        Rule::simple(K::TreeType, R::Str),
        Rule::complex(K::PowerRail, &h::STR_FLOAT).repeated(),
    ],
    check: None,
};

pub static WIRE_LOAD: GroupHandler = GroupHandler {
    name: "wire_load",
    header: &h::STR,
    rules: &[
        Rule::simple(K::Area, R::Float),
        Rule::simple(K::Capacitance, R::Float),
        Rule::simple(K::Resistance, R::Float),
        Rule::simple(K::Slope, R::Float),
        Rule::complex(K::FanoutLength, &h::INT_FLOAT).repeated(),
    ],
    check: None,
};

pub static WIRE_LOAD_TABLE: GroupHandler = GroupHandler {
    name: "wire_load_table",
    header: &h::STR,
    rules: &[Rule::complex(K::FanoutLength, &h::INT_FLOAT).repeated()],
    check: None,
};

pub static WIRE_LOAD_SELECTION: GroupHandler = GroupHandler {
    name: "wire_load_selection",
    header: &h::STR,
    rules: &[Rule::complex(K::WireLoadFromArea, &h::FLOAT_FLOAT_STR).repeated()],
    check: None,
};

pub static INPUT_VOLTAGE: GroupHandler = GroupHandler {
    name: "input_voltage",
    header: &h::STR,
    rules: &[
        Rule::simple(K::Vil, R::Expr),
        Rule::simple(K::Vih, R::Expr),
        Rule::simple(K::Vimin, R::Expr),
        Rule::simple(K::Vimax, R::Expr),
    ],
    check: None,
};

pub static OUTPUT_VOLTAGE: GroupHandler = GroupHandler {
    name: "output_voltage",
    header: &h::STR,
    rules: &[
        Rule::simple(K::Vol, R::Expr),
        Rule::simple(K::Voh, R::Expr),
        Rule::simple(K::Vomin, R::Expr),
        Rule::simple(K::Vomax, R::Expr),
    ],
    check: None,
};

pub static TYPE: GroupHandler = GroupHandler {
    name: "type",
    header: &h::STR,
    rules: &[
        Rule::simple(K::BaseType, R::Str),
        Rule::simple(K::DataType, R::Str),
        Rule::simple(K::BitFrom, R::Int),
        Rule::simple(K::BitTo, R::Int),
        Rule::simple(K::BitWidth, R::Int),
        Rule::simple(K::Downto, R::Bool),
    ],
    check: None,
};

fn check_table(body: &GroupBuilder) -> CheckResult {
    if !body.has(K::Values) {
        return Err("'values' is missing.".to_string());
    }
    Ok(())
}

fn check_domain(body: &GroupBuilder) -> CheckResult {
    if !body.has(K::Coefs) {
        return Err("'coefs' is missing.".to_string());
    }
    if !body.has(K::Orders) {
        return Err("'orders' is missing.".to_string());
    }
    Ok(())
}

/// Variables and indices must line up: `variable_n` needs `index_n` and
/// every lower variable.
fn check_template(body: &GroupBuilder) -> CheckResult {
    let missing = |kind: K| format!("'{}' is missing.", kind);
    let without = |present: K, absent: K| format!("'{}' is given without '{}'.", present, absent);

    if !body.has(K::Variable1) {
        return Err(missing(K::Variable1));
    }
    if !body.has(K::Index1) {
        return Err(missing(K::Index1));
    }
    if !body.has(K::Variable2) {
        if body.has(K::Variable3) {
            return Err(without(K::Variable3, K::Variable2));
        }
        if body.has(K::Index2) {
            return Err(without(K::Index2, K::Variable2));
        }
    } else if !body.has(K::Index2) {
        return Err(without(K::Variable2, K::Index2));
    }
    match (body.has(K::Variable3), body.has(K::Index3)) {
        (true, false) => Err(without(K::Variable3, K::Index3)),
        (false, true) => Err(without(K::Index3, K::Variable3)),
        _ => Ok(()),
    }
}
