//! JDBC types

use jsr373_model::{Attribute, AttributeType};

use super::domain::J2eeServer;
use super::names;

pub const DRIVER: &str = "jdbcDriver";

managed_object_type! {
    pub struct JdbcResource {
        name: names::JDBC_RESOURCE,
        path: "jdbc-resource",
        description: "A JDBC resource of a server.",
        parents: [J2eeServer],
    }
}

managed_object_type! {
    pub struct JdbcDataSource {
        name: names::JDBC_DATA_SOURCE,
        path: "jdbc-data-source",
        description: "A data source of a JDBC resource.",
        parents: [JdbcResource],
        attributes: [
            Attribute::builder(DRIVER, AttributeType::String, "The name of the JDBC driver of this data source.")
                .nillable(true)
                .build(),
        ],
    }
}

managed_object_type! {
    pub struct JdbcDriver {
        name: names::JDBC_DRIVER,
        path: "jdbc-driver",
        description: "A JDBC driver used by a data source.",
        parents: [JdbcDataSource],
    }
}
