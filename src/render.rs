//! Turning a [`Page`] into terminal text, an HTML document or JSON.

use std::io::{self, Write};
use std::path::Path;

use chrono::SecondsFormat;
use console::style;

use crate::args::OutputFormat;
use crate::models::{Repo, User};
use crate::ui::{Page, ProfileRegion};

/// Render `page` in `format`. `styled` only affects [`OutputFormat::Text`].
pub fn render(
    page: &Page,
    format: OutputFormat,
    styled: bool,
    w: &mut dyn Write,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => render_text(page, styled, w),
        OutputFormat::Html => render_html(page, w),
        OutputFormat::Json => render_json(page, w),
    }
}

/// Write an unstyled rendering of `page` to `path`, replacing the file.
pub async fn write_page(page: &Page, format: OutputFormat, path: &Path) -> io::Result<()> {
    let mut buf = Vec::new();
    render(page, format, false, &mut buf)?;
    tokio::fs::write(path, buf).await
}

pub fn render_json(page: &Page, w: &mut dyn Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, page)?;
    writeln!(w)
}

pub fn render_text(page: &Page, styled: bool, w: &mut dyn Write) -> io::Result<()> {
    match &page.profile {
        ProfileRegion::Empty => {}
        ProfileRegion::Error(msg) => {
            writeln!(
                w,
                "{} {}",
                style("✗").red().force_styling(styled),
                style(msg).red().bold().force_styling(styled)
            )?;
        }
        ProfileRegion::Card(user) => profile_text(user, styled, w)?,
    }

    if let Some(repos) = &page.repos {
        writeln!(w)?;
        writeln!(w, "{}", style("Latest Repos").bold().force_styling(styled))?;
        for repo in repos {
            repo_text(repo, styled, w)?;
        }
    }

    if let Some(chart) = &page.chart {
        writeln!(w)?;
        writeln!(w, "{} {}", style("Contributions:").bold().force_styling(styled), chart)?;
    }
    Ok(())
}

fn profile_text(user: &User, styled: bool, w: &mut dyn Write) -> io::Result<()> {
    let heading = match &user.name {
        Some(name) => format!("{} ({})", user.login, name),
        None => user.login.clone(),
    };
    writeln!(w, "{}", style(heading).cyan().bold().force_styling(styled))?;
    writeln!(w, "  Avatar: {}", user.avatar_url)?;
    writeln!(w, "  View Profile: {}", style(&user.html_url).underlined().force_styling(styled))?;
    writeln!(
        w,
        "  {}  {}  {}  {}",
        style(format!("Public Repos: {}", user.public_repos)).blue().force_styling(styled),
        style(format!("Public Gists: {}", user.public_gists)).white().force_styling(styled),
        style(format!("Followers: {}", user.followers)).green().force_styling(styled),
        style(format!("Following: {}", user.following)).cyan().force_styling(styled),
    )?;
    writeln!(w, "  Company: {}", user.company.as_deref().unwrap_or("null"))?;
    writeln!(w, "  Website/Blog: {}", user.blog.as_deref().unwrap_or("null"))?;
    writeln!(w, "  Location: {}", user.location.as_deref().unwrap_or("N/A"))?;
    writeln!(w, "  Member Since: {}", member_since(user))
}

fn repo_text(repo: &Repo, styled: bool, w: &mut dyn Write) -> io::Result<()> {
    writeln!(
        w,
        "  {} Stars: {:<6} Watchers: {:<6} Forks: {}",
        style(format!("{:<30}", repo.name)).yellow().force_styling(styled),
        repo.stargazers_count,
        repo.watchers_count,
        repo.forks_count
    )?;
    writeln!(w, "  {}", style(&repo.html_url).dim().force_styling(styled))
}

fn member_since(user: &User) -> String {
    user.created_at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Render a standalone HTML document. Every interpolated value is escaped.
pub fn render_html(page: &Page, w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "<!DOCTYPE html>")?;
    writeln!(w, "<html lang=\"en\">")?;
    writeln!(w, "<head>")?;
    writeln!(w, "  <meta charset=\"utf-8\">")?;
    writeln!(w, "  <title>GitHub User Finder</title>")?;
    writeln!(w, "</head>")?;
    writeln!(w, "<body>")?;

    writeln!(w, "<div id=\"profile\">")?;
    match &page.profile {
        ProfileRegion::Empty => {}
        ProfileRegion::Error(msg) => {
            writeln!(w, "  <div class=\"alert alert-danger\">{}</div>", escape(msg))?;
        }
        ProfileRegion::Card(user) => profile_html(user, w)?,
    }
    writeln!(w, "</div>")?;

    writeln!(w, "<div id=\"repos\">")?;
    if let Some(repos) = &page.repos {
        writeln!(w, "  <h3 class=\"page-heading mb-3\">Latest Repos</h3>")?;
        for repo in repos {
            repo_html(repo, w)?;
        }
    }
    writeln!(w, "</div>")?;

    writeln!(w, "<div id=\"grass\">")?;
    if let Some(chart) = &page.chart {
        writeln!(w, "  <img src=\"{}\" alt=\"contribution chart\">", escape(chart))?;
    }
    writeln!(w, "</div>")?;

    writeln!(w, "</body>")?;
    writeln!(w, "</html>")
}

fn profile_html(user: &User, w: &mut dyn Write) -> io::Result<()> {
    let blog = match &user.blog {
        Some(blog) => format!("<a href=\"{0}\" target=\"_blank\">{0}</a>", escape(blog)),
        None => "null".to_string(),
    };

    writeln!(w, "  <div class=\"card card-body mb-3\">")?;
    writeln!(w, "    <div class=\"col-md-3 text-center\">")?;
    writeln!(
        w,
        "      <img class=\"img-fluid mb-2\" src=\"{}\" alt=\"{}\">",
        escape(&user.avatar_url),
        escape(&user.login)
    )?;
    writeln!(
        w,
        "      <a href=\"{}\" target=\"_blank\" class=\"btn btn-primary btn-block mb-4\">View Profile</a>",
        escape(&user.html_url)
    )?;
    writeln!(w, "    </div>")?;
    writeln!(w, "    <div class=\"col-md-9\">")?;
    writeln!(w, "      <span class=\"badge badge-primary\">Public Repos: {}</span>", user.public_repos)?;
    writeln!(w, "      <span class=\"badge badge-secondary\">Public Gists: {}</span>", user.public_gists)?;
    writeln!(w, "      <span class=\"badge badge-success\">Followers: {}</span>", user.followers)?;
    writeln!(w, "      <span class=\"badge badge-info\">Following: {}</span>", user.following)?;
    writeln!(w, "      <ul class=\"list-group\">")?;
    writeln!(
        w,
        "        <li class=\"list-group-item\">Company: {}</li>",
        escape(user.company.as_deref().unwrap_or("null"))
    )?;
    writeln!(w, "        <li class=\"list-group-item\">Website/Blog: {}</li>", blog)?;
    writeln!(
        w,
        "        <li class=\"list-group-item\">Location: {}</li>",
        escape(user.location.as_deref().unwrap_or("N/A"))
    )?;
    writeln!(w, "        <li class=\"list-group-item\">Member Since: {}</li>", member_since(user))?;
    writeln!(w, "      </ul>")?;
    writeln!(w, "    </div>")?;
    writeln!(w, "  </div>")
}

fn repo_html(repo: &Repo, w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "  <div class=\"card card-body mb-2\">")?;
    writeln!(
        w,
        "    <a href=\"{}\" target=\"_blank\">{}</a>",
        escape(&repo.html_url),
        escape(&repo.name)
    )?;
    writeln!(w, "    <span class=\"badge badge-primary\">Stars: {}</span>", repo.stargazers_count)?;
    writeln!(w, "    <span class=\"badge badge-secondary\">Watchers: {}</span>", repo.watchers_count)?;
    writeln!(w, "    <span class=\"badge badge-success\">Forks: {}</span>", repo.forks_count)?;
    writeln!(w, "  </div>")
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
