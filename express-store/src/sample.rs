//! Hardcoded timetable and ticket history served by the in-memory repositories.

use chrono::{NaiveDate, NaiveTime};
use express_core::{FareOffer, FareTable, Ticket, TicketStatus, Train};
use express_shared::FareClass;

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("sample timetable has a valid time")
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("sample tickets have a valid date")
}

fn train(
    id: &str,
    number: &str,
    departure: NaiveTime,
    arrival: NaiveTime,
    duration: &str,
    fares: [(u32, i32); 3],
) -> Train {
    let [platzkart, coupe, sv] = fares;
    Train {
        id: id.to_string(),
        number: number.to_string(),
        departure,
        arrival,
        duration: duration.to_string(),
        fares: FareTable {
            platzkart: FareOffer::new(platzkart.0, platzkart.1),
            coupe: FareOffer::new(coupe.0, coupe.1),
            sv: FareOffer::new(sv.0, sv.1),
        },
    }
}

pub fn trains() -> Vec<Train> {
    vec![
        train("1", "002А", time(12, 30), time(8, 45), "20ч 15м", [(28, 2450), (12, 4890), (4, 8990)]),
        train("2", "016Ч", time(15, 20), time(11, 35), "20ч 15м", [(42, 2350), (18, 4690), (6, 8490)]),
        train("3", "030А", time(23, 45), time(19, 20), "19ч 35м", [(15, 2650), (8, 5090), (2, 9290)]),
    ]
}

struct TicketRow<'a> {
    id: &'a str,
    train_number: &'a str,
    route: (&'a str, &'a str),
    travel_date: NaiveDate,
    times: (NaiveTime, NaiveTime),
    duration: &'a str,
    fare_class: FareClass,
    seats: &'a str,
    price: i32,
    status: TicketStatus,
    booked_on: NaiveDate,
}

impl From<TicketRow<'_>> for Ticket {
    fn from(row: TicketRow<'_>) -> Self {
        Ticket {
            id: row.id.to_string(),
            train_number: row.train_number.to_string(),
            origin: row.route.0.to_string(),
            destination: row.route.1.to_string(),
            travel_date: row.travel_date,
            departure: row.times.0,
            arrival: row.times.1,
            duration: row.duration.to_string(),
            fare_class: row.fare_class,
            seats: row.seats.to_string(),
            price: row.price,
            status: row.status,
            booked_on: row.booked_on,
        }
    }
}

pub fn tickets() -> Vec<Ticket> {
    vec![
        TicketRow {
            id: "TK001",
            train_number: "002А",
            route: ("Москва", "Санкт-Петербург"),
            travel_date: date(2025, 1, 25),
            times: (time(12, 30), time(8, 45)),
            duration: "20ч 15м",
            fare_class: FareClass::Coupe,
            seats: "12, 13",
            price: 9780,
            status: TicketStatus::Active,
            booked_on: date(2025, 1, 15),
        }
        .into(),
        TicketRow {
            id: "TK002",
            train_number: "030А",
            route: ("Москва", "Казань"),
            travel_date: date(2025, 2, 10),
            times: (time(23, 45), time(19, 20)),
            duration: "19ч 35м",
            fare_class: FareClass::Platzkart,
            seats: "24",
            price: 2650,
            status: TicketStatus::Active,
            booked_on: date(2025, 1, 20),
        }
        .into(),
        TicketRow {
            id: "TK003",
            train_number: "016Ч",
            route: ("Санкт-Петербург", "Москва"),
            travel_date: date(2025, 1, 10),
            times: (time(15, 20), time(11, 35)),
            duration: "20ч 15м",
            fare_class: FareClass::Sv,
            seats: "3",
            price: 8490,
            status: TicketStatus::Completed,
            booked_on: date(2025, 1, 5),
        }
        .into(),
        TicketRow {
            id: "TK004",
            train_number: "002А",
            route: ("Москва", "Екатеринбург"),
            travel_date: date(2025, 1, 5),
            times: (time(12, 30), time(8, 45)),
            duration: "26ч 15м",
            fare_class: FareClass::Coupe,
            seats: "18, 19",
            price: 11560,
            status: TicketStatus::Cancelled,
            booked_on: date(2025, 1, 1),
        }
        .into(),
    ]
}
