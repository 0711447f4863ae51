use clap::ValueEnum;
use lista_types::{Status, StatusFilter};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Status tag as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum StatusArg {
    Pendente,
    Andamento,
    Concluido,
}

impl From<StatusArg> for Status {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Pendente => Status::Pendente,
            StatusArg::Andamento => Status::EmAndamento,
            StatusArg::Concluido => Status::Concluido,
        }
    }
}

impl fmt::Display for StatusArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusArg::Pendente => write!(f, "pendente"),
            StatusArg::Andamento => write!(f, "andamento"),
            StatusArg::Concluido => write!(f, "concluido"),
        }
    }
}

/// Status filter as accepted on the command line; `todos` is the sentinel
/// that matches every status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FilterArg {
    Todos,
    Pendente,
    Andamento,
    Concluido,
}

impl From<FilterArg> for StatusFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Todos => StatusFilter::Todos,
            FilterArg::Pendente => StatusFilter::Only(Status::Pendente),
            FilterArg::Andamento => StatusFilter::Only(Status::EmAndamento),
            FilterArg::Concluido => StatusFilter::Only(Status::Concluido),
        }
    }
}

impl fmt::Display for FilterArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterArg::Todos => write!(f, "todos"),
            FilterArg::Pendente => write!(f, "pendente"),
            FilterArg::Andamento => write!(f, "andamento"),
            FilterArg::Concluido => write!(f, "concluido"),
        }
    }
}
