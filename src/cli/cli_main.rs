use crate::electronegativity;
use crate::elements;
use crate::molmass;
use log::{error, info, warn};
use prettytable::{Cell, Row, Table};
use std::io::{self, Write};

pub fn run_interactive_menu() {
    loop {
        show_main_menu();
        let choice = get_user_input();

        match choice.trim() {
            "1" => molar_mass_menu(),
            "2" => en_difference_menu(),
            "3" => element_info_menu(),
            "4" => export_elements_menu(),
            "0" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

/* colors
Blue (\x1b[34m) - Welcome header text

Yellow (\x1b[33m) - Menu options

Cyan (\x1b[36m) - prompts

Red (\x1b[31m) - user-input errors

Reset (\x1b[0m) - Returns to normal color after each colored section
*/
fn show_main_menu() {
    println!(
        "\x1b[34m\n Welcome to chemcalc: molecular mass and \n
    electronegativity difference calculator \n \x1b[0m"
    );
    println!("\x1b[33m1. Molecular mass of a formula\x1b[0m");
    println!("\x1b[33m2. Electronegativity difference of an element pair\x1b[0m");
    println!("\x1b[33m3. Element data\x1b[0m");
    println!("\x1b[33m4. Export element table to JSON\x1b[0m");
    println!("\x1b[33m0. Exit\x1b[0m");
    print!("\x1b[36mEnter your choice: \x1b[0m");
    io::stdout().flush().unwrap();
}

fn get_user_input() -> String {
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .expect("Failed to read input");
    input
}

fn prompt(message: &str) -> String {
    print!("\x1b[36m{}\x1b[0m", message);
    io::stdout().flush().unwrap();
    get_user_input().trim().to_string()
}

fn molar_mass_menu() {
    loop {
        let input = prompt("Enter formula (e.g. H2O, Ca(NO3)2, 2NaCl), empty line to go back: ");
        if input.is_empty() {
            break;
        }
        info!("molar mass requested for '{}'", input);
        match molmass::molar_mass(&input) {
            Ok(mass) => println!("Molecular mass:\n{:.3} g/mol", mass),
            Err(e) => {
                error!("formula error for '{}': {}", input, e);
                println!("\x1b[31mInvalid formula:\n{}\x1b[0m", e);
            }
        }
    }
}

fn en_difference_menu() {
    loop {
        let input = prompt("Enter two elements (e.g. HF, NaCl, CO), empty line to go back: ");
        if input.is_empty() {
            break;
        }
        info!("EN difference requested for '{}'", input);
        match electronegativity::en_difference(&input) {
            Ok(report) => report.pretty_print(),
            Err(e) => {
                error!("EN difference error for '{}': {}", input, e);
                println!("\x1b[31mInvalid input:\n{}\x1b[0m", e);
            }
        }
    }
}

fn element_info_menu() {
    loop {
        let input = prompt("Enter element symbol (e.g. Na), empty line to go back: ");
        if input.is_empty() {
            break;
        }
        match elements::lookup(&input) {
            Some(element) => {
                let en = match element.electronegativity {
                    Some(en) => format!("{:.2}", en),
                    None => "n/a".to_string(),
                };
                let mut table = Table::new();
                table.add_row(Row::new(vec![
                    Cell::new("Symbol"),
                    Cell::new("Name"),
                    Cell::new("Atomic number"),
                    Cell::new("Atomic mass"),
                    Cell::new("Electronegativity"),
                ]));
                table.add_row(Row::new(vec![
                    Cell::new(element.symbol),
                    Cell::new(element.name),
                    Cell::new(&element.atomic_number.to_string()),
                    Cell::new(&format!("{:.3}", element.atomic_mass)),
                    Cell::new(&en),
                ]));
                table.printstd();
            }
            None => {
                warn!("unknown element symbol '{}'", input);
                println!("\x1b[31mNo such element: '{}'\x1b[0m", input);
            }
        }
    }
}

fn export_elements_menu() {
    let path = prompt("Output file [elements.json]: ");
    let path = if path.is_empty() {
        "elements.json".to_string()
    } else {
        path
    };
    match serde_json::to_string_pretty(elements::all()) {
        Ok(json) => match std::fs::write(&path, json) {
            Ok(()) => {
                info!("element table exported to '{}'", path);
                println!("Element table written to '{}'", path);
            }
            Err(e) => {
                error!("failed to write '{}': {}", path, e);
                println!("\x1b[31mCould not write '{}': {}\x1b[0m", path, e);
            }
        },
        Err(e) => {
            error!("failed to serialize element table: {}", e);
            println!("\x1b[31mSerialization error: {}\x1b[0m", e);
        }
    }
}
