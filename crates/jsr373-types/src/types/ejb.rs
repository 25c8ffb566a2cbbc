//! Enterprise beans

use super::application::EjbModule;
use super::names;

managed_object_type! {
    pub struct EntityBean {
        name: names::ENTITY_BEAN,
        path: "entity-bean",
        description: "An entity bean deployed in an EJB module.",
        parents: [EjbModule],
    }
}

managed_object_type! {
    pub struct StatelessSessionBean {
        name: names::STATELESS_SESSION_BEAN,
        path: "stateless-session-bean",
        description: "A stateless session bean deployed in an EJB module.",
        parents: [EjbModule],
    }
}

managed_object_type! {
    pub struct StatefulSessionBean {
        name: names::STATEFUL_SESSION_BEAN,
        path: "stateful-session-bean",
        description: "A stateful session bean deployed in an EJB module.",
        parents: [EjbModule],
    }
}

managed_object_type! {
    pub struct MessageDrivenBean {
        name: names::MESSAGE_DRIVEN_BEAN,
        path: "message-driven-bean",
        description: "A message driven bean deployed in an EJB module.",
        parents: [EjbModule],
    }
}
