
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}: missing argument")]
    MissingArgument(String),
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
    #[error("no input files")]
    NoInput,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Id {
    Mllvm,
    Machine,
    Entry,
    Subsystem,
    OutImplib,
    Stack,
    Output,
    SearchPath,
    Library,
    Shared,
    Bstatic,
    Verbose,
    DryRun,
    Input,
}

#[derive(Debug, Clone, Copy)]
enum Value {
    /// Bare flag, takes nothing.
    None,
    /// Value is the next argument.
    Separate,
    /// Value is either glued onto the option or the next argument.
    Either,
}

struct Spec {
    id: Id,
    spellings: &'static [&'static str],
    value: Value,
}

// The first matching entry wins, and within an entry spellings are listed
// longest first. -mllvm must come before -m or the prefix match would read it
// as an emulation name.
const SPECS: &[Spec] = &[
    Spec {
        id: Id::Mllvm,
        spellings: &["-mllvm"],
        value: Value::Separate,
    },
    Spec {
        id: Id::Machine,
        spellings: &["-m"],
        value: Value::Either,
    },
    Spec {
        id: Id::Entry,
        spellings: &["--entry", "-entry", "-e"],
        value: Value::Either,
    },
    Spec {
        id: Id::Subsystem,
        spellings: &["--subsystem", "-subsystem"],
        value: Value::Either,
    },
    Spec {
        id: Id::OutImplib,
        spellings: &["--out-implib", "-out-implib"],
        value: Value::Either,
    },
    Spec {
        id: Id::Stack,
        spellings: &["--stack", "-stack"],
        value: Value::Either,
    },
    Spec {
        id: Id::Output,
        spellings: &["-o"],
        value: Value::Either,
    },
    Spec {
        id: Id::SearchPath,
        spellings: &["--library-path", "-L"],
        value: Value::Either,
    },
    Spec {
        id: Id::Library,
        spellings: &["--library", "-l"],
        value: Value::Either,
    },
    Spec {
        id: Id::Shared,
        spellings: &["--shared", "-shared"],
        value: Value::None,
    },
    Spec {
        id: Id::Bstatic,
        spellings: &["--Bstatic", "-Bstatic"],
        value: Value::None,
    },
    Spec {
        id: Id::Verbose,
        spellings: &["--verbose", "-verbose", "-v"],
        value: Value::None,
    },
    Spec {
        id: Id::DryRun,
        spellings: &["-###"],
        value: Value::None,
    },
];

#[derive(Debug)]
pub struct Arg {
    id: Id,
    value: Option<String>,
    spelling: String,
}

impl Arg {
    pub fn id(&self) -> Id {
        self.id
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn spelling(&self) -> &str {
        &self.spelling
    }
}

#[derive(Debug)]
pub struct ArgList {
    args: Vec<Arg>,
}

impl ArgList {
    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    pub fn has(&self, id: Id) -> bool {
        self.args.iter().any(|arg| arg.id == id)
    }

    pub fn count(&self, id: Id) -> usize {
        self.args.iter().filter(|arg| arg.id == id).count()
    }

    pub fn last_value(&self, id: Id) -> Option<&str> {
        self.args
            .iter()
            .rev()
            .find(|arg| arg.id == id)
            .and_then(Arg::value)
    }

    /// Values of every occurrence of `id`, in command line order.
    pub fn values(&self, id: Id) -> impl Iterator<Item = &str> {
        self.args
            .iter()
            .filter(move |arg| arg.id == id)
            .filter_map(Arg::value)
    }
}

// A glued value: short two-character options take the remainder verbatim,
// longer spellings require an equals sign.
fn joined_value<'a>(token: &'a str, spelling: &str) -> Option<&'a str> {
    let rest = token.strip_prefix(spelling)?;
    if rest.is_empty() {
        return None;
    }
    if let Some(value) = rest.strip_prefix('=') {
        return Some(value);
    }
    (spelling.len() == 2).then_some(rest)
}

pub fn parse(argv: &[String]) -> Result<ArgList, Error> {
    let mut args = Vec::new();
    let mut missing: Option<String> = None;
    let mut unknown: Option<String> = None;

    let mut tokens = argv.iter();
    'outer: while let Some(token) = tokens.next() {
        if token == "-" || !token.starts_with('-') {
            args.push(Arg {
                id: Id::Input,
                value: Some(token.clone()),
                spelling: token.clone(),
            });
            continue;
        }

        for spec in SPECS {
            for &spelling in spec.spellings {
                if token == spelling {
                    match spec.value {
                        Value::None => args.push(Arg {
                            id: spec.id,
                            value: None,
                            spelling: token.clone(),
                        }),
                        Value::Separate | Value::Either => match tokens.next() {
                            Some(value) => args.push(Arg {
                                id: spec.id,
                                value: Some(value.clone()),
                                spelling: token.clone(),
                            }),
                            None => {
                                if missing.is_none() {
                                    missing = Some(token.clone());
                                }
                            }
                        },
                    }
                    continue 'outer;
                }

                if let Value::Either = spec.value {
                    if let Some(value) = joined_value(token, spelling) {
                        args.push(Arg {
                            id: spec.id,
                            value: Some(value.to_owned()),
                            spelling: spelling.to_owned(),
                        });
                        continue 'outer;
                    }
                }
            }
        }

        if unknown.is_none() {
            unknown = Some(token.clone());
        }
    }

    // All-or-nothing: the first missing value aborts, then the first unknown
    // flag, then the no-input check.
    if let Some(spelling) = missing {
        return Err(Error::MissingArgument(spelling));
    }
    if let Some(token) = unknown {
        return Err(Error::UnknownArgument(token));
    }

    let list = ArgList { args };
    if !list.has(Id::Input) && !list.has(Id::Library) {
        return Err(Error::NoInput);
    }
    Ok(list)
}
