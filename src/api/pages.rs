//! Server-rendered HTML pages.
//!
//! The page set is five fixed-shape documents, so they are assembled with
//! plain formatting helpers. Everything user-supplied goes through
//! `escape` before it reaches the markup.

use crate::storage::{Account, Link};

/// Minimal HTML entity escaping for text and attribute positions.
fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Shared chrome: header with the signed-in account's email and the
/// sign-in/out controls, then the page body.
fn layout(title: &str, account: Option<&Account>, body: &str) -> String {
    let nav = match account {
        Some(account) => format!(
            concat!(
                r#"<span class="email">{}</span> "#,
                r#"<form class="inline" method="POST" action="/logout"><button>Log out</button></form>"#
            ),
            escape(&account.email)
        ),
        None => concat!(
            r#"<a href="/login">Log in</a> "#,
            r#"<a href="/register">Register</a>"#
        )
        .to_string(),
    };

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html lang="en">"#,
            "<head>",
            r#"<meta charset="utf-8">"#,
            "<title>{title} - tinylink</title>",
            "</head>",
            "<body>",
            r#"<header><a href="/urls"><strong>tinylink</strong></a> <nav>{nav}</nav></header>"#,
            "<main>{body}</main>",
            "</body></html>"
        ),
        title = escape(title),
        nav = nav,
        body = body,
    )
}

pub fn urls_index_page(account: Option<&Account>, links: &[Link]) -> String {
    let body = if account.is_none() {
        concat!(
            "<h1>My URLs</h1>",
            r#"<p><a href="/login">Log in</a> or <a href="/register">register</a> to manage your short URLs.</p>"#
        )
        .to_string()
    } else if links.is_empty() {
        concat!(
            "<h1>My URLs</h1>",
            r#"<p>No URLs yet. <a href="/urls/new">Create one</a>.</p>"#
        )
        .to_string()
    } else {
        let mut rows = String::new();
        for link in links {
            rows.push_str(&format!(
                concat!(
                    "<tr>",
                    r#"<td><a href="/urls/{code}">{code}</a></td>"#,
                    "<td>{target}</td>",
                    r#"<td><form class="inline" method="POST" action="/urls/{code}/delete"><button>Delete</button></form></td>"#,
                    "</tr>"
                ),
                code = escape(&link.code),
                target = escape(&link.target),
            ));
        }
        format!(
            concat!(
                "<h1>My URLs</h1>",
                r#"<p><a href="/urls/new">New short URL</a></p>"#,
                "<table><thead><tr><th>Short code</th><th>Long URL</th><th></th></tr></thead>",
                "<tbody>{}</tbody></table>"
            ),
            rows
        )
    };

    layout("My URLs", account, &body)
}

pub fn urls_new_page(account: Option<&Account>) -> String {
    let body = concat!(
        "<h1>Create a short URL</h1>",
        r#"<form method="POST" action="/urls">"#,
        r#"<label>Long URL <input type="text" name="longURL" placeholder="http://example.com"></label>"#,
        "<button>Shorten</button>",
        "</form>"
    );

    layout("New URL", account, body)
}

pub fn urls_show_page(account: Option<&Account>, link: &Link, owned: bool) -> String {
    let mut body = format!(
        concat!(
            "<h1>{code}</h1>",
            r#"<p>Short URL: <a href="/u/{code}">/u/{code}</a></p>"#,
            "<p>Long URL: {target}</p>",
            "<p>Created: {created}</p>"
        ),
        code = escape(&link.code),
        target = escape(&link.target),
        created = link.created_at.format("%Y-%m-%d %H:%M UTC"),
    );

    if owned {
        body.push_str(&format!(
            concat!(
                "<h2>Edit</h2>",
                r#"<form method="POST" action="/urls/{code}">"#,
                r#"<label>Long URL <input type="text" name="longURL" value="{target}"></label>"#,
                "<button>Update</button>",
                "</form>",
                r#"<form method="POST" action="/urls/{code}/delete"><button>Delete</button></form>"#
            ),
            code = escape(&link.code),
            target = escape(&link.target),
        ));
    }

    layout(&link.code, account, &body)
}

pub fn login_page() -> String {
    let body = concat!(
        "<h1>Log in</h1>",
        r#"<form method="POST" action="/login">"#,
        r#"<label>Email <input type="email" name="email"></label>"#,
        r#"<label>Password <input type="password" name="password"></label>"#,
        "<button>Log in</button>",
        "</form>",
        r#"<p>New here? <a href="/register">Register</a></p>"#
    );

    layout("Log in", None, body)
}

pub fn register_page() -> String {
    let body = concat!(
        "<h1>Register</h1>",
        r#"<form method="POST" action="/register">"#,
        r#"<label>Email <input type="email" name="email"></label>"#,
        r#"<label>Password <input type="password" name="password"></label>"#,
        "<button>Register</button>",
        "</form>",
        r#"<p>Already registered? <a href="/login">Log in</a></p>"#
    );

    layout("Register", None, body)
}

pub fn error_page(status: u16, error_type: &str, message: &str) -> String {
    let body = format!(
        concat!(
            "<h1>{status} {error_type}</h1>",
            "<p>{message}</p>",
            r#"<p><a href="/urls">Back to my URLs</a></p>"#
        ),
        status = status,
        error_type = escape(error_type),
        message = escape(message),
    );

    layout(error_type, None, &body)
}
