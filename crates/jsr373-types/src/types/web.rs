//! Web components

use super::application::WebModule;
use super::names;

managed_object_type! {
    pub struct Servlet {
        name: names::SERVLET,
        path: "servlet",
        description: "A servlet deployed in a web module.",
        parents: [WebModule],
    }
}
