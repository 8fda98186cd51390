table! {
    domain_events (id) {
        id -> Uuid,
        event_type -> Text,
        display_text -> Text,
        main_table -> Text,
        main_id -> Uuid,
        event_data -> Nullable<Jsonb>,
        created_at -> Timestamp,
    }
}

table! {
    events (id) {
        id -> Uuid,
        name -> Text,
        venue -> Nullable<Text>,
        event_date -> Date,
        timezone -> Text,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

table! {
    vendor_tickets (id) {
        id -> Uuid,
        event_id -> Uuid,
        holder_name -> Text,
        booth_type -> Text,
        vendor_organization -> Nullable<Text>,
        status -> Text,
        checked_in_at -> Nullable<Timestamp>,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

joinable!(vendor_tickets -> events (event_id));

allow_tables_to_appear_in_same_query!(domain_events, events, vendor_tickets);
