use express_core::{Ticket, TicketStatus};

/// Tickets with the given status, or all of them. Source order is kept.
pub fn filter_tickets(tickets: &[Ticket], status: Option<TicketStatus>) -> Vec<Ticket> {
    match status {
        None => tickets.to_vec(),
        Some(status) => tickets
            .iter()
            .filter(|ticket| ticket.status == status)
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use express_shared::FareClass;

    fn ticket(id: &str, status: TicketStatus) -> Ticket {
        let day = NaiveDate::from_ymd_opt(2025, 1, 25).unwrap();
        let time = NaiveTime::from_hms_opt(12, 30, 0).unwrap();
        Ticket {
            id: id.to_string(),
            train_number: "002А".to_string(),
            origin: "Москва".to_string(),
            destination: "Санкт-Петербург".to_string(),
            travel_date: day,
            departure: time,
            arrival: time,
            duration: "20ч 15м".to_string(),
            fare_class: FareClass::Coupe,
            seats: "12, 13".to_string(),
            price: 9780,
            status,
            booked_on: day,
        }
    }

    fn ids(tickets: &[Ticket]) -> Vec<&str> {
        tickets.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_filter_by_status_keeps_order() {
        let tickets = vec![
            ticket("A", TicketStatus::Cancelled),
            ticket("B", TicketStatus::Active),
            ticket("C", TicketStatus::Completed),
            ticket("D", TicketStatus::Active),
        ];

        assert_eq!(ids(&filter_tickets(&tickets, Some(TicketStatus::Active))), vec!["B", "D"]);
        assert_eq!(ids(&filter_tickets(&tickets, Some(TicketStatus::Completed))), vec!["C"]);
        assert_eq!(ids(&filter_tickets(&tickets, None)), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_filter_empty_list() {
        assert!(filter_tickets(&[], Some(TicketStatus::Active)).is_empty());
    }
}
