//! Общие DTO между backend и клиентами дашборда членских взносов.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
