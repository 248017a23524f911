table! {
    artists (id) {
        id -> Uuid,
        name -> Text,
        city -> Text,
        state -> Text,
        phone -> Nullable<Text>,
        genres -> Array<Text>,
        image_url -> Nullable<Text>,
        facebook_url -> Nullable<Text>,
        website_url -> Nullable<Text>,
        seeking_venue -> Bool,
        seeking_description -> Nullable<Text>,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

table! {
    shows (id) {
        id -> Uuid,
        venue_id -> Uuid,
        artist_id -> Uuid,
        start_time -> Timestamp,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

table! {
    venues (id) {
        id -> Uuid,
        name -> Text,
        city -> Text,
        state -> Text,
        address -> Text,
        phone -> Nullable<Text>,
        genres -> Array<Text>,
        image_url -> Nullable<Text>,
        facebook_url -> Nullable<Text>,
        website_url -> Nullable<Text>,
        seeking_talent -> Bool,
        seeking_description -> Nullable<Text>,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

joinable!(shows -> artists (artist_id));
joinable!(shows -> venues (venue_id));

allow_tables_to_appear_in_same_query!(artists, shows, venues);
