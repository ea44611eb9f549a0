use crate::prelude::{eprintln, println, *};
use colored::Colorize;

/// One row of the endpoint listing
#[derive(Debug, Clone, Copy)]
pub struct RouteInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

pub const ROUTES: [RouteInfo; 9] = [
    RouteInfo {
        method: "GET",
        path: "/",
        description: "API documentation page",
    },
    RouteInfo {
        method: "GET",
        path: "/api/todos",
        description: "Get all todo items",
    },
    RouteInfo {
        method: "POST",
        path: "/api/todos",
        description: "Create a new todo item",
    },
    RouteInfo {
        method: "PATCH",
        path: "/api/todos/<id>",
        description: "Update todo completion status",
    },
    RouteInfo {
        method: "DELETE",
        path: "/api/todos/<id>",
        description: "Delete a todo item",
    },
    RouteInfo {
        method: "GET",
        path: "/api/blog-posts",
        description: "Get all blog posts",
    },
    RouteInfo {
        method: "GET",
        path: "/api/blog-posts/<id>",
        description: "Get a specific blog post by ID",
    },
    RouteInfo {
        method: "POST",
        path: "/api/blog-posts",
        description: "Create a new blog post",
    },
    RouteInfo {
        method: "GET",
        path: "/api/weather/<city>",
        description: "Get weather data for a city",
    },
];

/// `routes` subcommand entry point
pub fn run(global: crate::Global) -> Result<()> {
    let mut table = new_table();
    table.add_row(prettytable::row!["Method", "Path", "Description"]);

    for route in &ROUTES {
        table.add_row(prettytable::row![route.method, route.path, route.description]);
    }

    table.printstd();

    if global.verbose {
        let cities: Vec<&str> = portfolio_core::weather::cities().collect();
        println!();
        println!("Weather cities: {}", cities.join(", "));
    }

    Ok(())
}

/// Write the startup banner to stderr
pub fn print_banner(addr: &str) {
    eprintln!("{}", "Jordi Kongolo Portfolio API Server".bold());
    eprintln!("Server running on: http://{addr}");
    eprintln!("API Documentation available at: http://{addr}/");
    eprintln!("Available endpoints:");

    for route in ROUTES.iter().filter(|r| r.path != "/") {
        eprintln!("   {} {}", f!("{:<6}", route.method).green(), route.path);
    }

    eprintln!();
}
