//! Built-in JSR-77 managed object types
//!
//! The variant set is closed: [`registrations`] lists every concrete type and
//! is the only input the global registry is built from.
//!
//! Instances exist only inside a registry; the variants cannot be built
//! directly:
//!
//! ```compile_fail
//! let server = jsr373_types::types::J2eeServer::default();
//! ```
//!
//! ```
//! use jsr373_types::types::{self, J2eeServer};
//! use jsr373_types::TypeRegistry;
//!
//! let registry = TypeRegistry::new(types::registrations()).unwrap();
//! let server = registry.lookup_type::<J2eeServer>().unwrap();
//! assert_eq!(server.name(), types::names::J2EE_SERVER);
//! ```

use crate::registry::Registration;

/// Declare a unit variant with a template slot and its [`ManagedObjectType`]
/// impl. `attributes` takes `Attribute` expressions, `defaults` takes
/// `(name, value)` pairs; both are optional.
///
/// [`ManagedObjectType`]: crate::object_type::ManagedObjectType
macro_rules! managed_object_type {
    (
        $(#[$meta:meta])*
        $vis:vis struct $ty:ident {
            name: $name:expr,
            path: $path:expr,
            description: $description:expr,
            parents: [$($parent:ident),* $(,)?],
            $(attributes: [$($attr:expr),* $(,)?],)?
            $(defaults: [$(($default_name:expr, $default_value:expr)),* $(,)?],)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis struct $ty {
            template: $crate::object_type::TemplateSlot,
        }

        impl $crate::registry::Construct for $ty {
            fn construct() -> Self {
                Self {
                    template: $crate::object_type::TemplateSlot::new(),
                }
            }
        }

        impl $crate::object_type::ManagedObjectType for $ty {
            fn name(&self) -> &'static str {
                $name
            }

            fn path(&self) -> &'static str {
                $path
            }

            fn description(&self) -> &'static str {
                $description
            }

            fn parents(&self) -> Vec<$crate::object_type::TypeKey> {
                vec![$($crate::object_type::TypeKey::of::<$parent>()),*]
            }

            #[allow(unused_variables)]
            fn add_attribute_descriptions(
                &self,
                builder: &mut jsr373_model::ResourceTemplateBuilder,
            ) -> std::result::Result<(), jsr373_model::ModelError> {
                $($(builder.add_attribute($attr)?;)*)?
                Ok(())
            }

            #[allow(unused_variables)]
            fn set_default_attribute_values(&self, builder: &mut jsr373_model::ResourceInstanceBuilder) {
                $($(builder.set_attribute($default_name, $default_value);)*)?
            }

            fn template_slot(&self) -> &$crate::object_type::TemplateSlot {
                &self.template
            }
        }
    };
}

pub mod application;
pub mod connector;
pub mod domain;
pub mod ejb;
pub mod jdbc;
pub mod resource;
pub mod web;

pub use application::{
    AppClientModule, EjbModule, J2eeApplication, ResourceAdapterModule, WebModule,
};
pub use connector::{JcaConnectionFactory, JcaManagedConnectionFactory, JcaResource, ResourceAdapter};
pub use domain::{J2eeDomain, J2eeServer, Jvm};
pub use ejb::{EntityBean, MessageDrivenBean, StatefulSessionBean, StatelessSessionBean};
pub use jdbc::{JdbcDataSource, JdbcDriver, JdbcResource};
pub use resource::{
    JavaMailResource, JmsResource, JndiResource, JtaResource, RmiIiopResource, UrlResource,
};
pub use web::Servlet;

/// Type names
pub mod names {
    pub const J2EE_DOMAIN: &str = "J2EEDomain";
    pub const J2EE_SERVER: &str = "J2EEServer";
    pub const JVM: &str = "JVM";
    pub const J2EE_APPLICATION: &str = "J2EEApplication";
    pub const APP_CLIENT_MODULE: &str = "AppClientModule";
    pub const EJB_MODULE: &str = "EJBModule";
    pub const WEB_MODULE: &str = "WebModule";
    pub const RESOURCE_ADAPTER_MODULE: &str = "ResourceAdapterModule";
    pub const ENTITY_BEAN: &str = "EntityBean";
    pub const STATELESS_SESSION_BEAN: &str = "StatelessSessionBean";
    pub const STATEFUL_SESSION_BEAN: &str = "StatefulSessionBean";
    pub const MESSAGE_DRIVEN_BEAN: &str = "MessageDrivenBean";
    pub const SERVLET: &str = "Servlet";
    pub const RESOURCE_ADAPTER: &str = "ResourceAdapter";
    pub const JAVA_MAIL_RESOURCE: &str = "JavaMailResource";
    pub const JCA_RESOURCE: &str = "JCAResource";
    pub const JCA_CONNECTION_FACTORY: &str = "JCAConnectionFactory";
    pub const JCA_MANAGED_CONNECTION_FACTORY: &str = "JCAManagedConnectionFactory";
    pub const JDBC_RESOURCE: &str = "JDBCResource";
    pub const JDBC_DATA_SOURCE: &str = "JDBCDataSource";
    pub const JDBC_DRIVER: &str = "JDBCDriver";
    pub const JMS_RESOURCE: &str = "JMSResource";
    pub const JNDI_RESOURCE: &str = "JNDIResource";
    pub const JTA_RESOURCE: &str = "JTAResource";
    pub const RMI_IIOP_RESOURCE: &str = "RMI_IIOPResource";
    pub const URL_RESOURCE: &str = "URLResource";
}

/// Every concrete managed object type, parents before children.
pub fn registrations() -> Vec<Registration> {
    vec![
        Registration::of::<J2eeDomain>(),
        Registration::of::<J2eeServer>(),
        Registration::of::<Jvm>(),
        Registration::of::<J2eeApplication>(),
        Registration::of::<AppClientModule>(),
        Registration::of::<EjbModule>(),
        Registration::of::<WebModule>(),
        Registration::of::<ResourceAdapterModule>(),
        Registration::of::<EntityBean>(),
        Registration::of::<StatelessSessionBean>(),
        Registration::of::<StatefulSessionBean>(),
        Registration::of::<MessageDrivenBean>(),
        Registration::of::<Servlet>(),
        Registration::of::<ResourceAdapter>(),
        Registration::of::<JavaMailResource>(),
        Registration::of::<JcaResource>(),
        Registration::of::<JcaConnectionFactory>(),
        Registration::of::<JcaManagedConnectionFactory>(),
        Registration::of::<JdbcResource>(),
        Registration::of::<JdbcDataSource>(),
        Registration::of::<JdbcDriver>(),
        Registration::of::<JmsResource>(),
        Registration::of::<JndiResource>(),
        Registration::of::<JtaResource>(),
        Registration::of::<RmiIiopResource>(),
        Registration::of::<UrlResource>(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registrations_are_unique() {
        let regs = registrations();
        assert_eq!(regs.len(), 26);
        let keys: HashSet<_> = regs.iter().map(Registration::key).collect();
        assert_eq!(keys.len(), regs.len());
    }

    #[test]
    fn test_registrations_list_parents_first() {
        let mut seen = HashSet::new();
        for reg in registrations() {
            let ty = reg.construct();
            for parent in ty.parents() {
                assert!(
                    seen.contains(&parent),
                    "{} listed before its parent {:?}",
                    ty.name(),
                    parent
                );
            }
            seen.insert(reg.key());
        }
    }
}
