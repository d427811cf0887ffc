pub mod users_facade_impl;
