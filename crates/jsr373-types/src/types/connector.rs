//! Connector architecture (JCA) types

use jsr373_model::{Attribute, AttributeType};

use super::application::ResourceAdapterModule;
use super::domain::J2eeServer;
use super::names;

pub const MANAGED_CONNECTION_FACTORY: &str = "managedConnectionFactory";

managed_object_type! {
    pub struct ResourceAdapter {
        name: names::RESOURCE_ADAPTER,
        path: "resource-adapter",
        description: "A resource adapter contained in a resource adapter module.",
        parents: [ResourceAdapterModule],
    }
}

managed_object_type! {
    pub struct JcaResource {
        name: names::JCA_RESOURCE,
        path: "jca-resource",
        description: "A JCA resource provided by a resource adapter.",
        parents: [J2eeServer],
    }
}

managed_object_type! {
    pub struct JcaConnectionFactory {
        name: names::JCA_CONNECTION_FACTORY,
        path: "jca-connection-factory",
        description: "A connection factory of a JCA resource.",
        parents: [JcaResource],
        attributes: [
            Attribute::new(
                MANAGED_CONNECTION_FACTORY,
                AttributeType::String,
                "The name of the managed connection factory backing this connection factory.",
            ),
        ],
    }
}

managed_object_type! {
    pub struct JcaManagedConnectionFactory {
        name: names::JCA_MANAGED_CONNECTION_FACTORY,
        path: "jca-managed-connection-factory",
        description: "A managed connection factory of a JCA connection factory.",
        parents: [JcaConnectionFactory],
    }
}
