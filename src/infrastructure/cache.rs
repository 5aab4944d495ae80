pub mod listing_cache;
