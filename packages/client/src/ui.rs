//! UI utilities for the client.

/// Prompt for the interactive editor
pub fn prompt(language: &str, buffering: bool) -> String {
    if buffering {
        "...> ".to_string()
    } else {
        format!("{}> ", language)
    }
}

pub fn print_help() {
    println!(
        "Type code and finish with an empty line to analyze it.\n\
         :lang <name>  switch language (typescript, javascript, python, dart, go, cpp)\n\
         :help         show this help\n\
         :quit         exit"
    );
}
