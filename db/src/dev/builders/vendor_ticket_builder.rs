use dev::builders::*;
use diesel::PgConnection;
use models::*;
use rand::prelude::*;
use uuid::Uuid;

pub struct VendorTicketBuilder<'a> {
    event_id: Option<Uuid>,
    holder_name: String,
    booth_type: String,
    vendor_organization: Option<String>,
    checked_in: bool,
    connection: &'a PgConnection,
}

impl<'a> VendorTicketBuilder<'a> {
    pub fn new(connection: &PgConnection) -> VendorTicketBuilder {
        let x: u16 = random();
        VendorTicketBuilder {
            event_id: None,
            holder_name: format!("Vendor {}", x),
            booth_type: "Food".to_string(),
            vendor_organization: None,
            checked_in: false,
            connection,
        }
    }

    pub fn with_event(mut self, event: &Event) -> Self {
        self.event_id = Some(event.id);
        self
    }

    pub fn with_holder_name(mut self, holder_name: &str) -> Self {
        self.holder_name = holder_name.to_string();
        self
    }

    pub fn with_booth_type(mut self, booth_type: &str) -> Self {
        self.booth_type = booth_type.to_string();
        self
    }

    pub fn with_vendor_organization(mut self, vendor_organization: &str) -> Self {
        self.vendor_organization = Some(vendor_organization.to_string());
        self
    }

    pub fn checked_in(mut self) -> Self {
        self.checked_in = true;
        self
    }

    pub fn finish(&mut self) -> VendorTicket {
        let event_id = self
            .event_id
            .unwrap_or_else(|| EventBuilder::new(self.connection).finish().id);

        let ticket = VendorTicket::create(
            event_id,
            self.holder_name.clone(),
            self.booth_type.clone(),
            self.vendor_organization.clone(),
        )
        .commit(self.connection)
        .unwrap();

        if self.checked_in {
            match VendorTicket::check_in(ticket.id, self.connection).unwrap() {
                CheckInResults::CheckedIn(ticket) => ticket,
                _ => panic!("Expected newly issued ticket to check in"),
            }
        } else {
            ticket
        }
    }
}
