//! # Server-rendered pages
//!
//! 각 페이지는 공통 레이아웃 안에 본문만 바꿔 넣는 문자열 템플릿입니다.
//! 사용자가 입력한 값(비밀 텍스트)은 모두 [`html_escape`]를 거칩니다.

use crate::config::AuthProvider;
use crate::utils::string_utils::html_escape;

/// 페이지 공통 정보
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    pub authenticated: bool,
    /// 활성화된 OAuth 공급자
    pub providers: Vec<AuthProvider>,
}

fn layout(title: &str, ctx: &PageContext, body: &str) -> String {
    let nav = if ctx.authenticated {
        r#"<a href="/secrets">Secrets</a> <a href="/submit">Submit a Secret</a> <a href="/logout">Log Out</a>"#
    } else {
        r#"<a href="/secrets">Secrets</a> <a href="/login">Login</a> <a href="/register">Register</a>"#
    };

    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{title} | Secrets</title>
    <style>
      body {{ font-family: ui-sans-serif, system-ui, -apple-system, Segoe UI, Roboto, Helvetica, Arial; padding: 18px; max-width: 720px; margin: 0 auto; }}
      nav a {{ margin-right: 12px; }}
      .card {{ border: 1px solid #e5e7eb; border-radius: 10px; padding: 14px 16px; margin: 12px 0; }}
      input, textarea {{ padding: 10px 12px; border-radius: 8px; border: 1px solid #d1d5db; width: 100%; box-sizing: border-box; margin-bottom: 10px; }}
      button, .btn {{ padding: 10px 12px; border-radius: 8px; border: 1px solid #d1d5db; background:#111827; color:#fff; cursor:pointer; text-decoration: none; display: inline-block; margin-right: 8px; }}
      .secret {{ font-size: 1.2em; }}
    </style>
  </head>
  <body>
    <nav><a href="/">Home</a> {nav}</nav>
    {body}
  </body>
</html>
"#,
        title = html_escape(title),
        nav = nav,
        body = body,
    )
}

fn provider_buttons(providers: &[AuthProvider]) -> String {
    if providers.is_empty() {
        return String::new();
    }

    let buttons: Vec<String> = providers
        .iter()
        .map(|p| {
            format!(
                r#"<a class="btn" href="/auth/{}" role="button">Sign In with {}</a>"#,
                p.as_str(),
                p.display_name()
            )
        })
        .collect();

    format!(r#"<div class="card">{}</div>"#, buttons.join("\n"))
}

fn credentials_form(action: &str, submit_label: &str) -> String {
    format!(
        r#"<div class="card">
      <form action="{action}" method="POST">
        <label for="username">Username</label>
        <input type="text" id="username" name="username" maxlength="64" required />
        <label for="password">Password</label>
        <input type="password" id="password" name="password" maxlength="128" required />
        <button type="submit">{submit_label}</button>
      </form>
    </div>"#
    )
}

pub fn home_page(ctx: &PageContext) -> String {
    let actions = if ctx.authenticated {
        r#"<a class="btn" href="/secrets" role="button">See Secrets</a><a class="btn" href="/submit" role="button">Submit a Secret</a>"#
    } else {
        r#"<a class="btn" href="/register" role="button">Register</a><a class="btn" href="/login" role="button">Login</a>"#
    };

    layout(
        "Home",
        ctx,
        &format!(
            r#"<h1>Secrets</h1>
    <p>Don't keep your secrets, share them anonymously!</p>
    {actions}"#
        ),
    )
}

pub fn login_page(ctx: &PageContext) -> String {
    let body = format!(
        "<h1>Login</h1>\n    {}\n    {}",
        credentials_form("/login", "Login"),
        provider_buttons(&ctx.providers)
    );
    layout("Login", ctx, &body)
}

pub fn register_page(ctx: &PageContext) -> String {
    let body = format!(
        "<h1>Register</h1>\n    {}\n    {}",
        credentials_form("/register", "Register"),
        provider_buttons(&ctx.providers)
    );
    layout("Register", ctx, &body)
}

/// 비밀 목록. 누가 쓴 비밀인지는 표시하지 않습니다.
pub fn secrets_page(ctx: &PageContext, secrets: &[String]) -> String {
    let items = if secrets.is_empty() {
        "<p>No secrets yet.</p>".to_string()
    } else {
        secrets
            .iter()
            .map(|s| format!(r#"<p class="secret">{}</p>"#, html_escape(s)))
            .collect::<Vec<_>>()
            .join("\n    ")
    };

    let action = if ctx.authenticated {
        r#"<a class="btn" href="/submit" role="button">Submit a Secret</a>"#
    } else {
        ""
    };

    layout(
        "Secrets",
        ctx,
        &format!("<h1>You've Discovered My Secret!</h1>\n    {}\n    {}", items, action),
    )
}

pub fn submit_page(ctx: &PageContext) -> String {
    layout(
        "Submit",
        ctx,
        r#"<h1>Secrets</h1>
    <p>Don't keep your secrets, share them anonymously!</p>
    <div class="card">
      <form action="/submit" method="POST">
        <input type="text" name="secret" maxlength="1000" placeholder="What's your secret?" required />
        <button type="submit">Submit</button>
      </form>
    </div>"#,
    )
}
