//! Server resources without children

use super::domain::J2eeServer;
use super::names;

managed_object_type! {
    pub struct JavaMailResource {
        name: names::JAVA_MAIL_RESOURCE,
        path: "java-mail-resource",
        description: "A JavaMail resource of a server.",
        parents: [J2eeServer],
    }
}

managed_object_type! {
    pub struct JmsResource {
        name: names::JMS_RESOURCE,
        path: "jms-resource",
        description: "A JMS resource of a server.",
        parents: [J2eeServer],
    }
}

managed_object_type! {
    pub struct JndiResource {
        name: names::JNDI_RESOURCE,
        path: "jndi-resource",
        description: "A JNDI resource of a server.",
        parents: [J2eeServer],
    }
}

managed_object_type! {
    pub struct JtaResource {
        name: names::JTA_RESOURCE,
        path: "jta-resource",
        description: "A JTA resource of a server.",
        parents: [J2eeServer],
    }
}

managed_object_type! {
    pub struct RmiIiopResource {
        name: names::RMI_IIOP_RESOURCE,
        path: "rmi-iiop-resource",
        description: "An RMI/IIOP resource of a server.",
        parents: [J2eeServer],
    }
}

managed_object_type! {
    pub struct UrlResource {
        name: names::URL_RESOURCE,
        path: "url-resource",
        description: "A URL resource of a server.",
        parents: [J2eeServer],
    }
}
