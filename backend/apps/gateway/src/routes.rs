//! Route table
//!
//! A request goes to the route with the longest matching prefix. Prefixes
//! match whole path segments: `/users` covers `/users` and `/users/me` but
//! not `/usersettings`.

use crate::config::Upstreams;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    Users,
    Products,
    Cart,
    Orders,
}

impl Upstream {
    pub fn base_url(self, upstreams: &Upstreams) -> &str {
        match self {
            Upstream::Users => &upstreams.users,
            Upstream::Products => &upstreams.products,
            Upstream::Cart => &upstreams.cart,
            Upstream::Orders => &upstreams.orders,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub prefix: &'static str,
    pub upstream: Upstream,
    /// Requires a verified bearer token
    pub protected: bool,
}

pub const ROUTES: &[Route] = &[
    Route {
        prefix: "/users/login",
        upstream: Upstream::Users,
        protected: false,
    },
    Route {
        prefix: "/users/register",
        upstream: Upstream::Users,
        protected: false,
    },
    Route {
        prefix: "/users",
        upstream: Upstream::Users,
        protected: true,
    },
    Route {
        prefix: "/products",
        upstream: Upstream::Products,
        protected: true,
    },
    Route {
        prefix: "/cart",
        upstream: Upstream::Cart,
        protected: true,
    },
    Route {
        prefix: "/orders",
        upstream: Upstream::Orders,
        protected: true,
    },
];

fn covers(prefix: &str, path: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Longest-prefix match over [`ROUTES`]
pub fn resolve(path: &str) -> Option<&'static Route> {
    ROUTES
        .iter()
        .filter(|route| covers(route.prefix, path))
        .max_by_key(|route| route.prefix.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upstream(path: &str) -> Option<(Upstream, bool)> {
        resolve(path).map(|route| (route.upstream, route.protected))
    }

    #[test]
    fn test_public_routes() {
        assert_eq!(upstream("/users/login"), Some((Upstream::Users, false)));
        assert_eq!(upstream("/users/register"), Some((Upstream::Users, false)));
        assert_eq!(upstream("/users/login/"), Some((Upstream::Users, false)));
    }

    #[test]
    fn test_protected_routes() {
        assert_eq!(upstream("/users"), Some((Upstream::Users, true)));
        assert_eq!(upstream("/users/me"), Some((Upstream::Users, true)));
        assert_eq!(upstream("/products/7"), Some((Upstream::Products, true)));
        assert_eq!(upstream("/cart/1/checkout"), Some((Upstream::Cart, true)));
        assert_eq!(upstream("/orders"), Some((Upstream::Orders, true)));
    }

    #[test]
    fn test_prefix_is_segment_aware() {
        // not under /users/login, so the protected /users route applies
        assert_eq!(upstream("/users/loginx"), Some((Upstream::Users, true)));
        assert_eq!(upstream("/usersettings"), None);
        assert_eq!(upstream("/cartography"), None);
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(upstream("/"), None);
        assert_eq!(upstream("/login"), None);
        assert_eq!(upstream("/admin/users"), None);
    }
}
