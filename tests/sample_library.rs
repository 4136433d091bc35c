//! A small but complete library, read end to end.

use approx::assert_relative_eq;

use dotlib_core::ast::enums::{DelayModel, Direction, Technology, TimingSense, TimingType, VarType};
use dotlib_core::catalog::AttrKind;
use dotlib_core::{parse_with, Diagnostic, Group, ParserConfig, Severity, Value};

const SAMPLE: &str = r#"/*
 * demo standard cells
 */
library (demo_lib) {
  technology (cmos) ;
  delay_model : table_lookup ;
  date : "2024/01/01" ;
  revision : 1.0 ;
  time_unit : "1ns" ;
  voltage_unit : "1V" ;
  current_unit : "1mA" ;
  pulling_resistance_unit : "1kohm" ;
  leakage_power_unit : "1nW" ;
  capacitive_load_unit (1, pf) ;
  nom_process : 1.0 ;
  nom_temperature : 25.0 ;
  nom_voltage : 1.8 ;
  default_max_transition : 0.5 ;
  voltage_map (VDD, 1.8) ;
  voltage_map (VSS, 0.0) ;
  define (drive_strength, cell, float) ;

  operating_conditions (typical) {
    process : 1.0 ;
    temperature : 25 ;
    voltage : 1.8 ;
    tree_type : balanced_tree ;
  }
  default_operating_conditions : typical ;

  input_voltage (cmos_in) {
    vil : 0.3 * VDD ;
    vih : 0.7 * VDD ;
    vimin : -0.5 ;
    vimax : VDD + 0.5 ;
  }

  lu_table_template (delay_2x2) {
    variable_1 : input_net_transition ;
    variable_2 : total_output_net_capacitance ;
    index_1 ("0.1, 0.5") ;
    index_2 ("0.01, 0.1") ;
  }

  cell (INVX1) {
    area : 1.5 ; // um^2
    cell_footprint : inv ;
    cell_leakage_power : 0.012 ;
    pin (A) {
      direction : input ;
      capacitance : 0.002 ;
    }
    pin (Y) {
      direction : output ;
      function : "A'" ;
      max_capacitance : 0.2 ;
      timing () {
        related_pin : "A" ;
        timing_sense : negative_unate ;
        timing_type : combinational ;
        cell_rise (delay_2x2) {
          index_1 ("0.1, 0.5") ;
          values ("0.05, 0.08", \
                  "0.07, 0.11") ;
        }
        cell_fall (delay_2x2) {
          values ("0.04, 0.07", "0.06, 0.10") ;
        }
      }
      internal_power () {
        related_pin : "A" ;
        rise_power (scalar) {
          values ("0.001") ;
        }
      }
    }
  }

  cell (DFFX1) {
    area : 4.0 ;
    ff (IQ, IQN) {
      next_state : "D" ;
      clocked_on : "CK" ;
    }
    pin (D) {
      direction : input ;
    }
    pin (CK) {
      direction : input ;
      clock : true ;
    }
    pin (Q) {
      direction : output ;
      function : "IQ" ;
      timing () {
        related_pin : "CK" ;
        timing_type : rising_edge ;
        cell_rise (scalar) {
          values ("0.12") ;
        }
      }
    }
  }

  wire_load (small) {
    resistance : 0.1 ;
    capacitance : 0.2 ;
    area : 0.0 ;
    slope : 5.0 ;
    fanout_length (1, 1.5) ;
    fanout_length (2, 3.0) ;
  }
  wire_load_selection (sel) {
    wire_load_from_area (0, 100, small) ;
  }
}
"#;

fn parse_sample(text: &str) -> (Group, Vec<Diagnostic>) {
    let mut diags: Vec<Diagnostic> = Vec::new();
    let lib = parse_with(text, &ParserConfig::default(), &mut diags).expect("parse failed");
    (lib, diags)
}

#[test]
fn test_library_attributes() {
    let (lib, diags) = parse_sample(SAMPLE);
    assert!(diags.is_empty(), "{:?}", diags);
    assert_eq!(lib.name(), Some("demo_lib"));
    assert_eq!(
        lib.complex(AttrKind::Technology).map(|e| e[0].value.as_technology()),
        Some(Some(Technology::Cmos))
    );
    assert_eq!(
        lib.simple(AttrKind::DelayModel).and_then(Value::as_delay_model),
        Some(DelayModel::TableLookup)
    );
    assert_eq!(lib.simple(AttrKind::Revision).map(Value::string_value), Some("1.0"));
    assert_eq!(lib.simple(AttrKind::TimeUnit).map(Value::string_value), Some("1ns"));
    assert_eq!(lib.simple(AttrKind::NomTemperature).and_then(Value::as_float), Some(25.0));
    assert_eq!(lib.attrs_of(AttrKind::VoltageMap).count(), 2);
    assert_eq!(lib.groups_of(AttrKind::Cell).count(), 2);
}

#[test]
fn test_template_and_tables() {
    let (lib, _) = parse_sample(SAMPLE);
    let template = lib.find_group(AttrKind::LuTableTemplate, "delay_2x2").expect("no template");
    assert_eq!(
        template.simple(AttrKind::Variable2).and_then(Value::as_var_type),
        Some(VarType::TotalOutputNetCapacitance)
    );

    let inv = lib.find_group(AttrKind::Cell, "INVX1").expect("no INVX1");
    let y = inv.find_group(AttrKind::Pin, "Y").expect("no Y");
    assert_eq!(y.simple(AttrKind::Direction).and_then(Value::as_direction), Some(Direction::Output));

    let timing = y.group(AttrKind::Timing).expect("no timing");
    assert_eq!(
        timing.simple(AttrKind::TimingSense).and_then(Value::as_timing_sense),
        Some(TimingSense::NegativeUnate)
    );
    assert_eq!(
        timing.simple(AttrKind::TimingType).and_then(Value::as_timing_type),
        Some(TimingType::Combinational)
    );

    let rise = timing.group(AttrKind::CellRise).expect("no cell_rise");
    assert_eq!(rise.name(), Some("delay_2x2"));
    let rows: Vec<&[f64]> = rise
        .complex(AttrKind::Values)
        .expect("no values")
        .iter()
        .map(|row| row.value.float_vector_value())
        .collect();
    assert_eq!(rows, vec![&[0.05, 0.08][..], &[0.07, 0.11][..]]);
}

#[test]
fn test_functions_and_sequential_cells() {
    let (lib, _) = parse_sample(SAMPLE);
    let inv = lib.find_group(AttrKind::Cell, "INVX1").expect("no INVX1");
    let function = inv
        .find_group(AttrKind::Pin, "Y")
        .and_then(|y| y.simple(AttrKind::Function))
        .and_then(Value::as_function)
        .expect("no function");
    assert_eq!(function.to_string(), "!A");
    assert_eq!(function.evaluate(&|pin: &str| Some(pin != "A")), Some(true));

    let dff = lib.find_group(AttrKind::Cell, "DFFX1").expect("no DFFX1");
    let ff = dff.group(AttrKind::Ff).expect("no ff");
    let names: Vec<&str> = ff.header_elems().iter().map(|e| e.value.string_value()).collect();
    assert_eq!(names, vec!["IQ", "IQN"]);
    let clock = ff.simple(AttrKind::ClockedOn).and_then(Value::as_function).expect("no clocked_on");
    assert_eq!(clock.inputs(), vec!["CK"]);

    let ck = dff.find_group(AttrKind::Pin, "CK").expect("no CK");
    assert_eq!(ck.simple(AttrKind::Clock).and_then(Value::as_bool), Some(true));
}

#[test]
fn test_input_voltage_expressions() {
    let (lib, _) = parse_sample(SAMPLE);
    let levels = lib.find_group(AttrKind::InputVoltage, "cmos_in").expect("no input_voltage");
    let eval = |kind| {
        levels
            .simple(kind)
            .and_then(Value::as_expr)
            .map(|e| e.evaluate(1.8, 0.0, 0.0))
            .expect("no expression")
    };
    assert_relative_eq!(eval(AttrKind::Vil), 0.54, epsilon = 1e-12);
    assert_relative_eq!(eval(AttrKind::Vih), 1.26, epsilon = 1e-12);
    assert_relative_eq!(eval(AttrKind::Vimin), -0.5);
    assert_relative_eq!(eval(AttrKind::Vimax), 2.3, epsilon = 1e-12);
}

#[test]
fn test_wire_loads() {
    let (lib, _) = parse_sample(SAMPLE);
    let wl = lib.find_group(AttrKind::WireLoad, "small").expect("no wire_load");
    let lengths: Vec<(i64, f64)> = wl
        .attrs_of(AttrKind::FanoutLength)
        .filter_map(|a| a.value())
        .map(|v| (v.value.complex_elems()[0].value.int_value(), v.value.complex_elems()[1].value.float_value()))
        .collect();
    assert_eq!(lengths, vec![(1, 1.5), (2, 3.0)]);
}

#[test]
fn test_spans_nest() {
    let (lib, _) = parse_sample(SAMPLE);
    fn check(group: &Group) {
        for attr in &group.attrs {
            assert!(group.span.contains(&attr.span), "{} escapes {}", attr.kind, group.kind);
            if let Some(child) = attr.as_group() {
                check(child);
            }
        }
    }
    check(&lib);
    assert_eq!(lib.span.start.line, 4);
}

#[test]
fn test_dump_reparses() {
    let (lib, _) = parse_sample(SAMPLE);
    let dumped = lib.to_string();
    let (again, diags) = parse_sample(&dumped);
    assert!(diags.is_empty());
    assert_eq!(again.to_string(), dumped);
    assert_eq!(again.groups_of(AttrKind::Cell).count(), 2);
}

#[test]
fn test_trailing_content_warns() {
    let text = format!("{}\ncell (orphan) {{\n}}\n", SAMPLE);
    let (lib, diags) = parse_sample(&text);
    assert_eq!(lib.name(), Some("demo_lib"));
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].severity, Severity::Warning);
}

#[cfg(feature = "cli")]
#[test]
fn test_missing_file() {
    let mut diags: Vec<Diagnostic> = Vec::new();
    let result = dotlib_core::parse_file(
        std::path::Path::new("/nonexistent/cells.lib"),
        &ParserConfig::default(),
        &mut diags,
    );
    assert!(matches!(result, Err(dotlib_core::DotlibError::FileReadError { .. })));
}
