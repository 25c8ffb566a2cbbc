//! Domain, server and JVM types

use jsr373_model::{Attribute, AttributeType};

use super::names;

pub const SERVER_VENDOR: &str = "serverVendor";
pub const SERVER_VERSION: &str = "serverVersion";
pub const JAVA_VERSION: &str = "javaVersion";
pub const JAVA_VENDOR: &str = "javaVendor";
pub const NODE: &str = "node";

managed_object_type! {
    /// Management domain; root of the hierarchy.
    pub struct J2eeDomain {
        name: names::J2EE_DOMAIN,
        path: "domain",
        description: "A management domain.",
        parents: [],
    }
}

managed_object_type! {
    pub struct J2eeServer {
        name: names::J2EE_SERVER,
        path: "server",
        description: "A server instance within a domain.",
        parents: [J2eeDomain],
        attributes: [
            Attribute::new(SERVER_VENDOR, AttributeType::String, "The server vendor."),
            Attribute::new(SERVER_VERSION, AttributeType::String, "The server version."),
        ],
        defaults: [
            (SERVER_VENDOR, "JBoss"),
        ],
    }
}

managed_object_type! {
    pub struct Jvm {
        name: names::JVM,
        path: "jvm",
        description: "A Java virtual machine a server is running in.",
        parents: [J2eeServer],
        attributes: [
            Attribute::new(JAVA_VERSION, AttributeType::String, "The Java Runtime Environment version of the JVM."),
            Attribute::new(JAVA_VENDOR, AttributeType::String, "The Java Runtime Environment vendor of the JVM."),
            Attribute::builder(NODE, AttributeType::String, "The fully qualified host name of the node the JVM is running on.")
                .nillable(true)
                .build(),
        ],
    }
}
