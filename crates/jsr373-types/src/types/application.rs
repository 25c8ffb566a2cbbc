//! Applications and deployable modules

use jsr373_model::{Attribute, AttributeType, ModelNode};

use super::domain::J2eeServer;
use super::names;

pub const DEPLOYMENT_DESCRIPTOR: &str = "deploymentDescriptor";
pub const JAVA_VMS: &str = "javaVMs";

const DEPLOYMENT_DESCRIPTOR_DESCRIPTION: &str =
    "The original XML deployment descriptor that was created for this module or application.";
const JAVA_VMS_DESCRIPTION: &str = "The JVMs on which this module is running.";

fn empty_list() -> ModelNode {
    ModelNode::from(Vec::<String>::new())
}

managed_object_type! {
    pub struct J2eeApplication {
        name: names::J2EE_APPLICATION,
        path: "application",
        description: "An application deployed on a server.",
        parents: [J2eeServer],
        attributes: [
            Attribute::builder(DEPLOYMENT_DESCRIPTOR, AttributeType::String, DEPLOYMENT_DESCRIPTOR_DESCRIPTION)
                .nillable(true)
                .build(),
        ],
    }
}

managed_object_type! {
    pub struct AppClientModule {
        name: names::APP_CLIENT_MODULE,
        path: "app-client-module",
        description: "An application client module.",
        parents: [J2eeServer, J2eeApplication],
        attributes: [
            Attribute::builder(DEPLOYMENT_DESCRIPTOR, AttributeType::String, DEPLOYMENT_DESCRIPTOR_DESCRIPTION)
                .nillable(true)
                .build(),
            Attribute::new(JAVA_VMS, AttributeType::List, JAVA_VMS_DESCRIPTION),
        ],
        defaults: [
            (JAVA_VMS, empty_list()),
        ],
    }
}

managed_object_type! {
    pub struct EjbModule {
        name: names::EJB_MODULE,
        path: "ejb-module",
        description: "An EJB module.",
        parents: [J2eeServer, J2eeApplication],
        attributes: [
            Attribute::builder(DEPLOYMENT_DESCRIPTOR, AttributeType::String, DEPLOYMENT_DESCRIPTOR_DESCRIPTION)
                .nillable(true)
                .build(),
            Attribute::new(JAVA_VMS, AttributeType::List, JAVA_VMS_DESCRIPTION),
        ],
        defaults: [
            (JAVA_VMS, empty_list()),
        ],
    }
}

managed_object_type! {
    pub struct WebModule {
        name: names::WEB_MODULE,
        path: "web-module",
        description: "A web module.",
        parents: [J2eeServer, J2eeApplication],
        attributes: [
            Attribute::builder(DEPLOYMENT_DESCRIPTOR, AttributeType::String, DEPLOYMENT_DESCRIPTOR_DESCRIPTION)
                .nillable(true)
                .build(),
            Attribute::new(JAVA_VMS, AttributeType::List, JAVA_VMS_DESCRIPTION),
        ],
        defaults: [
            (JAVA_VMS, empty_list()),
        ],
    }
}

managed_object_type! {
    pub struct ResourceAdapterModule {
        name: names::RESOURCE_ADAPTER_MODULE,
        path: "resource-adapter-module",
        description: "A resource adapter module.",
        parents: [J2eeServer, J2eeApplication],
        attributes: [
            Attribute::builder(DEPLOYMENT_DESCRIPTOR, AttributeType::String, DEPLOYMENT_DESCRIPTOR_DESCRIPTION)
                .nillable(true)
                .build(),
            Attribute::new(JAVA_VMS, AttributeType::List, JAVA_VMS_DESCRIPTION),
        ],
        defaults: [
            (JAVA_VMS, empty_list()),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object_type::TypeKey;
    use crate::registry::TypeRegistry;
    use crate::types;
    use std::collections::HashSet;

    #[test]
    fn test_modules_have_two_parents() {
        let expected: HashSet<_> = [TypeKey::of::<J2eeServer>(), TypeKey::of::<J2eeApplication>()]
            .into_iter()
            .collect();
        let registry = TypeRegistry::new(types::registrations()).unwrap();
        let modules = [
            TypeKey::of::<AppClientModule>(),
            TypeKey::of::<EjbModule>(),
            TypeKey::of::<WebModule>(),
            TypeKey::of::<ResourceAdapterModule>(),
        ];
        for key in modules {
            let module = registry.lookup(key).unwrap();
            let parents: HashSet<_> = module.parents().into_iter().collect();
            assert_eq!(parents, expected, "{}", module.name());
        }
    }
}
