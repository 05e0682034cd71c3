use anstyle::AnsiColor;
use clap::crate_authors;
use clap::crate_name;
use clap::crate_version;
use mqrun_lib::constants::style_from_fg;
use mqrun_lib::constants::ERROR_STYLE;
use mqrun_lib::constants::HELP_STYLE;
use mqrun_lib::constants::PRIMARY_STYLE;

/// Util function for getting the style for the CLI
pub fn get_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(style_from_fg(AnsiColor::Yellow).bold())
        .header(style_from_fg(AnsiColor::Green).bold().underline())
        .literal(style_from_fg(AnsiColor::Cyan).bold())
        .invalid(style_from_fg(AnsiColor::Blue).bold())
        .error(ERROR_STYLE)
        .valid(HELP_STYLE)
        .placeholder(style_from_fg(AnsiColor::White))
}

/// Pretty print mqrun's version
pub fn print_version(script: bool) {
    if script {
        println!("{} {}", crate_name!(), crate_version!());

        return;
    }

    println!(
        "{}{}{:#} at version {}{}{:#}",
        PRIMARY_STYLE,
        crate_name!(),
        PRIMARY_STYLE,
        PRIMARY_STYLE,
        crate_version!(),
        PRIMARY_STYLE
    );
    println!("Authored by: {}", crate_authors!(", "));
}
