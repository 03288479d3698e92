use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;

use hotel_records::HotelRecords;
use hotel_records::domain::hotel::Hotel;
use hotel_records::domain::id::ReservationId;
use hotel_records::domain::reservation::Reservation;
use hotel_records::store::RecordStore;

#[derive(Debug, Parser)]
#[command(name = "hotel-records", version, about = "Manage hotels, customers and room reservations in a JSON file")]
pub struct Cli {
    /// Store file (".json" is appended if missing). Defaults to $HOTEL_RECORDS_STORE or hotels.json.
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Log directory. Defaults to $HOTEL_RECORDS_LOG_DIR or ./logs.
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Hotel maintenance
    #[command(subcommand)]
    Hotel(HotelCommand),

    /// Customer maintenance
    #[command(subcommand)]
    Customer(CustomerCommand),

    /// Reserve a room, registering the customer if needed
    Reserve {
        hotel: String,
        customer: String,
        date: String,
        #[arg(long, default_value = "single")]
        room_type: String,
    },

    /// Cancel the customer's first reservation, or the one given by --id
    Cancel {
        hotel: String,
        customer: String,
        #[arg(long)]
        id: Option<u64>,
    },

    /// List a customer's reservations
    Reservations { hotel: String, customer: String },
}

#[derive(Debug, Subcommand)]
pub enum HotelCommand {
    Create {
        name: String,
        location: String,
        /// Room inventory entry, e.g. --room single=3 (repeatable)
        #[arg(long = "room", value_parser = parse_room)]
        rooms: Vec<(String, u32)>,
    },
    Delete {
        name: String,
    },
    Show {
        name: String,
    },
    List,
    Modify {
        name: String,
        #[arg(long)]
        new_name: Option<String>,
        #[arg(long)]
        new_location: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum CustomerCommand {
    Create { hotel: String, name: String },
    Delete { hotel: String, name: String },
    Show { hotel: String, name: String },
    Rename { hotel: String, name: String, new_name: String },
}

fn parse_room(value: &str) -> Result<(String, u32), String> {
    let (room_type, count) = value.split_once('=').ok_or_else(|| format!("expected ROOM_TYPE=COUNT, got '{}'", value))?;
    let count = count.trim().parse::<u32>().map_err(|e| format!("invalid room count '{}': {}", count, e))?;

    Ok((room_type.trim().to_string(), count))
}

/// Executes one command and renders its outcome.
pub fn run<S: RecordStore>(records: &HotelRecords<S>, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Hotel(command) => run_hotel(records, command),
        Command::Customer(command) => run_customer(records, command),
        Command::Reserve { hotel, customer, date, room_type } => {
            let reservation = records.reservations.create_reservation(&hotel, &customer, &date, &room_type)?;
            success(&format!("Reservation for {} created at {} (id {})", customer, hotel, reservation.id));
            Ok(())
        }
        Command::Cancel { hotel, customer, id: None } => {
            records.reservations.cancel_reservation(&hotel, &customer)?;
            success(&format!("Reservation for {} cancelled at {}", customer, hotel));
            Ok(())
        }
        Command::Cancel { hotel, customer: _, id: Some(id) } => {
            let cancelled = records.reservations.cancel_reservation_by_id(&hotel, ReservationId::new(id))?;
            success(&format!("Reservation {} for {} cancelled at {}", cancelled.id, cancelled.customer_name, hotel));
            Ok(())
        }
        Command::Reservations { hotel, customer } => {
            let reservations = records.reservations.reservations_for(&hotel, &customer)?;
            if reservations.is_empty() {
                println!("No reservation found for {} in {}", customer, hotel);
            }
            reservations.iter().for_each(print_reservation);
            Ok(())
        }
    }
}

fn run_hotel<S: RecordStore>(records: &HotelRecords<S>, command: HotelCommand) -> anyhow::Result<()> {
    match command {
        HotelCommand::Create { name, location, rooms } => {
            records.hotels.create_hotel(&name, &location, rooms.into_iter().collect::<BTreeMap<_, _>>())?;
            success("Hotel created");
        }
        HotelCommand::Delete { name } => {
            records.hotels.delete_hotel(&name)?;
            success("Hotel deleted");
        }
        HotelCommand::Show { name } => print_hotel(&records.hotels.get_hotel(&name)?),
        HotelCommand::List => records.hotels.list_hotels()?.iter().for_each(print_hotel),
        HotelCommand::Modify { name, new_name, new_location } => {
            records.hotels.modify_hotel(&name, new_name.as_deref(), new_location.as_deref())?;
            success("Hotel information modified");
        }
    }

    Ok(())
}

fn run_customer<S: RecordStore>(records: &HotelRecords<S>, command: CustomerCommand) -> anyhow::Result<()> {
    match command {
        CustomerCommand::Create { hotel, name } => {
            records.customers.create_customer(&hotel, &name)?;
            success(&format!("Customer {} created for {}", name, hotel));
        }
        CustomerCommand::Delete { hotel, name } => {
            records.customers.delete_customer(&hotel, &name)?;
            success(&format!("Customer {} deleted", name));
        }
        CustomerCommand::Show { hotel, name } => {
            let customer = records.customers.find_customer(&hotel, &name)?;
            println!("{} {} (id {})", "customer".bold(), customer.name, customer.id);
        }
        CustomerCommand::Rename { hotel, name, new_name } => {
            records.customers.rename_customer(&hotel, &name, &new_name)?;
            success(&format!("Customer name updated from {} to {}", name, new_name));
        }
    }

    Ok(())
}

fn success(message: &str) {
    println!("{}", message.green());
}

fn print_hotel(hotel: &Hotel) {
    println!("{} {} (id {}), {}", "hotel".bold(), hotel.name, hotel.id, hotel.location);
    for (room_type, count) in hotel.rooms.iter() {
        println!("  {:<12} {} available", room_type, count);
    }
    println!("  {} customer(s), {} reservation(s)", hotel.customers.len(), hotel.reservations.len());
    hotel.reservations.iter().for_each(print_reservation);
}

fn print_reservation(reservation: &Reservation) {
    println!(
        "  #{} {} ({}) {} room on {}",
        reservation.id, reservation.customer_name, reservation.customer_id, reservation.room_type, reservation.date
    );
}
