// Kept in sync by hand with `db::bootstrap::CREATE_USERS_TABLE`.

diesel::table! {
    users (id) {
        id -> Int8,
        username -> Text,
        email -> Text,
        created_at -> Timestamptz,
    }
}
