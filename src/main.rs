use std::{env, fs::read_to_string, path::PathBuf, process, time::Instant};

use jsonnet_lexer::{
    display_error,
    lexer::{
        lexer::{IdentifierSet, Lexer},
        tokens::TokenKind,
    },
};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut identifiers = IdentifierSet::Ascii;
    let mut file_path = None;
    for arg in &args {
        match arg.as_str() {
            "--unicode-identifiers" => identifiers = IdentifierSet::Unicode,
            _ if file_path.is_none() => file_path = Some(arg.as_str()),
            _ => usage(),
        }
    }

    let Some(file_path) = file_path else { usage() };
    let file = PathBuf::from(file_path);
    let file_name = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.to_string());

    let source = match read_to_string(&file) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read {}: {}", file.display(), err);
            process::exit(1);
        }
    };

    let start = Instant::now();
    let mut lexer = Lexer::new(source.clone(), Some(file_name)).with_identifiers(identifiers);

    loop {
        match lexer.next_token() {
            Ok(token) if token.kind == TokenKind::EOF => break,
            Ok(token) => token.debug(),
            Err(error) => {
                display_error(&error, &source, &file);
                process::exit(1);
            }
        }
    }

    println!("Tokenized {} tokens in {:?}", lexer.tokens().len(), start.elapsed());
}

fn usage() -> ! {
    eprintln!("Usage: jsonnet-lexer [--unicode-identifiers] <file>");
    process::exit(2);
}
