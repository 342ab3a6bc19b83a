//! Classic login page rendering.
//!
//! The page is a pure function of `LoginView`: exactly one of the privileged,
//! member, or form fragments is emitted. The resolved username is echoed as
//! stored, without HTML escaping, matching the page the challenge ships.

use crate::services::credentials::LoginView;

const STYLE: &str = r"
body {
    background-color: gray;
}
#container{
    width: 800px;
    position: absolute;
    top: 50%;
    left: 50%;
    margin-left: -25%;
    border: 10px solid black;
}
form {
    padding: 20px 5px;
}
input[type=text],input[type=password] {
    display: block;
    width: 100%;
    background: white;
    border: 2px solid black;
    color: black;
    font-size: 26px;
    padding: 2px 5px;
    text-align: center;
}
input[type=submit] {
    padding: 2px 4px;
    border: 2px solid black;
    background: black;
    color: white;
    font-size: 26px;
    text-align: center;
}
.twocolumn {
    display: flex;
}
.message {
    text-align: center;
    color: white;
    font-size: 32px;
    font-weight: bold;
    font-family: sans-serif;
}
";

fn credential_form(submit_name: &str, submit_label: &str) -> String {
    format!(
        r#"<form action="index.php" method="POST">
                    <div><input type="text" name="username" placeholder="USERNAME"></div>
                    <div><input type="password" name="password" placeholder="PASSWORD"></div>
                    <div><input type="submit" name="{submit_name}" value="{submit_label}"></div>
                </form>"#
    )
}

/// Body fragment for a view, without the surrounding document.
#[must_use]
pub fn render_fragment(view: &LoginView, flag: &str) -> String {
    match view {
        LoginView::Privileged => format!(r#"<div class="message">{flag}</div>"#),
        LoginView::Member(username) => format!(r#"<div class="message">{username}</div>"#),
        LoginView::Anonymous => format!(
            r#"<div class="twocolumn">
                {}
                {}
            </div>"#,
            credential_form("register", "REGISTER"),
            credential_form("login", "LOGIN"),
        ),
    }
}

/// Complete HTML document for a view.
#[must_use]
pub fn render_page(view: &LoginView, flag: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>JUST LOGIN</title>
<style>{STYLE}</style>
</head>
<body>
    <div id="container">
        {}
    </div>
</body>
</html>
"#,
        render_fragment(view, flag)
    )
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
