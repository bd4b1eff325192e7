use std::fmt::Display;

use comfy_table::{Attribute, Cell, CellAlignment, Table, modifiers, presets};
use eagle_reader::{Readings, api::Attributes};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table
}

fn optional_cell(value: Option<impl Display>) -> Cell {
    match value {
        Some(value) => Cell::new(value).set_alignment(CellAlignment::Right),
        None => Cell::new("-").set_alignment(CellAlignment::Right).add_attribute(Attribute::Dim),
    }
}

pub fn build_readings_table(readings: &Readings) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Reading", "Value"]);
    table.add_row(vec![
        Cell::new("Instantaneous demand"),
        optional_cell(readings.instantaneous_demand),
    ]);
    table.add_row(vec![
        Cell::new("Total energy delivered"),
        optional_cell(readings.summation_delivered),
    ]);
    table.add_row(vec![
        Cell::new("Total energy received"),
        optional_cell(readings.summation_received),
    ]);
    table.add_row(vec![
        Cell::new("Net total").add_attribute(Attribute::Bold),
        optional_cell(readings.net_total()).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn build_devices_table(hardware_addresses: &[String]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["#", "Hardware address"]);
    for (i, hardware_address) in hardware_addresses.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1).add_attribute(Attribute::Dim),
            Cell::new(hardware_address),
        ]);
    }
    table
}

pub fn build_variables_table(attributes: &Attributes) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Name", "Value", "Units"]);
    for variable in attributes {
        table.add_row(vec![
            Cell::new(variable.name().unwrap_or_default()),
            optional_cell(variable.value().filter(|value| !value.is_empty())),
            Cell::new(variable.units().unwrap_or_default()).add_attribute(Attribute::Dim),
        ]);
    }
    table
}
