// src/flatten.rs
//
// One case × one source → one FlatRow.
//
// Column layout (stable, consumers rely on it):
//   CASE_COLUMNS, SOURCE_COLUMNS, SEARCHED_COLUMNS, COVER_COLUMNS,
//   then envolvido{i}_nome / _tipo_normalizado / _tipo for i = 1..=N.
//
// Absent data at any level gives an empty cell, never a missing fixed column.

use crate::specs::{Case, Cover, InvolvedParty, Source};
use crate::store::{DataSet, FlatRow};

pub const CASE_COLUMNS: [&str; 4] = [
    "numero", "data_inicio", "titulo_polo_ativo", "titulo_polo_passivo",
];

pub const SOURCE_COLUMNS: [&str; 12] = [
    "descricao", "nome", "sigla", "tipo", "grau", "grau_formatado", "tribunal",
    "segredo_justica", "arquivado", "status_predito", "data_ultima_movimentacao", "url",
];

pub const SEARCHED_COLUMNS: [&str; 2] = ["tipo_99_normalizado", "polo_99"];

pub const COVER_COLUMNS: [&str; 11] = [
    "assuntos_normalizados", "classe", "assunto", "area", "orgao_julgador",
    "data_distribuicao", "data_arquivamento",
    "nome_assunto", "nome_assunto_com_pai", "path_completo_assunto",
    "valor_causa",
];

/// Number of columns every row carries before the party groups.
pub const FIXED_WIDTH: usize =
    CASE_COLUMNS.len() + SOURCE_COLUMNS.len() + SEARCHED_COLUMNS.len() + COVER_COLUMNS.len();

/// Separator used when a list of subjects lands in one cell.
pub const SUBJECT_SEP: &str = "; ";

/// Column names of party `index` (1-based).
pub fn party_columns(index: usize) -> [String; 3] {
    [
        format!("envolvido{index}_nome"),
        format!("envolvido{index}_tipo_normalizado"),
        format!("envolvido{index}_tipo"),
    ]
}

/// Flatten one source of `case` into a row.
pub fn flatten(case: &Case, source: &Source) -> FlatRow {
    let mut row = FlatRow::with_capacity(FIXED_WIDTH + 3 * source.parties.len());

    // Case
    let [numero, inicio, ativo, passivo] = CASE_COLUMNS;
    row.insert(numero, text(&case.cnj_number));
    row.insert(inicio, text(&case.start_date));
    row.insert(ativo, text(&case.active_side_title));
    row.insert(passivo, text(&case.passive_side_title));

    // Source
    let tribunal = source.tribunal.as_ref().and_then(|t| t.name.clone());
    let values = [
        text(&source.description),
        text(&source.name),
        text(&source.acronym),
        text(&source.kind),
        number(source.degree),
        text(&source.degree_label),
        text(&tribunal),
        flag(source.under_seal),
        flag(source.archived),
        text(&source.predicted_status),
        text(&source.last_movement_date),
        text(&source.url),
    ];
    for (col, val) in SOURCE_COLUMNS.iter().zip(values) {
        row.insert(*col, val);
    }

    // Searched party: first entry only
    let (kind, side) = match source.searched_party_types.first() {
        Some(t) => (text(&t.normalized_kind), text(&t.side)),
        None => (s!(), s!()),
    };
    row.insert(SEARCHED_COLUMNS[0], kind);
    row.insert(SEARCHED_COLUMNS[1], side);

    // Cover
    let cover = cover_values(source.cover.as_ref());
    for (col, val) in COVER_COLUMNS.iter().zip(cover) {
        row.insert(*col, val);
    }

    // Parties, 1-based
    for (i, party) in source.parties.iter().enumerate() {
        push_party(&mut row, i + 1, party);
    }

    row
}

/// All rows of one case, in source order. Zero sources → zero rows.
pub fn flatten_case(case: &Case) -> impl Iterator<Item = FlatRow> + '_ {
    case.sources.iter().map(move |src| flatten(case, src))
}

/// Append every row of `cases` to `ds`, keeping case and source order.
pub fn flatten_into(ds: &mut DataSet, cases: &[Case]) {
    for case in cases {
        ds.extend(flatten_case(case));
    }
}

/* ---------- helpers ---------- */

fn cover_values(cover: Option<&Cover>) -> [String; 11] {
    let Some(c) = cover else {
        return Default::default();
    };

    let subjects = c.subjects
        .iter()
        .filter_map(|s| s.name.as_deref())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(SUBJECT_SEP);

    let (p_name, p_parent, p_path) = match &c.primary_subject {
        Some(p) => (text(&p.name), text(&p.name_with_parent), text(&p.full_path)),
        None => (s!(), s!(), s!()),
    };

    let value = c.case_value
        .as_ref()
        .and_then(|v| v.amount.as_ref())
        .map(ToString::to_string)
        .unwrap_or_default();

    [
        subjects,
        text(&c.class),
        text(&c.subject),
        text(&c.area),
        text(&c.adjudicating_body),
        text(&c.distribution_date),
        text(&c.archiving_date),
        p_name,
        p_parent,
        p_path,
        value,
    ]
}

fn push_party(row: &mut FlatRow, index: usize, party: &InvolvedParty) {
    let [name, norm, kind] = party_columns(index);
    row.insert(name, text(&party.name));
    row.insert(norm, text(&party.normalized_kind));
    row.insert(kind, text(&party.kind));
}

#[inline]
fn text(v: &Option<String>) -> String { v.clone().unwrap_or_default() }

#[inline]
fn number(v: Option<i64>) -> String { v.map(|n| n.to_string()).unwrap_or_default() }

// Spreadsheet convention carried over from earlier exports: True / False
#[inline]
fn flag(v: Option<bool>) -> String {
    match v {
        Some(true) => s!("True"),
        Some(false) => s!("False"),
        None => s!(),
    }
}
