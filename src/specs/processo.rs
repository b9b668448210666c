// src/specs/processo.rs
//
// Payload of `GET /envolvido/processos`. Field names follow the API;
// Rust names are English.

use std::fmt;

use serde::Deserialize;

use crate::specs::null_as_default;

/// One page of a search by CPF/CNPJ as sent on the wire.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct SearchResponse {
    #[serde(rename = "envolvido_encontrado")]
    pub searched: Option<SearchedParty>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<Case>,
    pub links: Option<Links>,
}

/// Who the provider matched the identifier to. Logged, otherwise unused.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct SearchedParty {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "tipo_pessoa")]
    pub person_kind: Option<String>,
    #[serde(rename = "quantidade_processos")]
    pub case_count: Option<Scalar>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Links {
    pub next: Option<String>,
}

/// A legal proceeding (`processo`).
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Case {
    #[serde(rename = "numero_cnj")]
    pub cnj_number: Option<String>,
    #[serde(rename = "data_inicio")]
    pub start_date: Option<String>,
    #[serde(rename = "titulo_polo_ativo")]
    pub active_side_title: Option<String>,
    #[serde(rename = "titulo_polo_passivo")]
    pub passive_side_title: Option<String>,
    #[serde(rename = "fontes", default, deserialize_with = "null_as_default")]
    pub sources: Vec<Source>,
}

/// One tribunal/system's view of a case (`fonte`).
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Source {
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "sigla")]
    pub acronym: Option<String>,
    #[serde(rename = "tipo")]
    pub kind: Option<String>,
    #[serde(rename = "grau")]
    pub degree: Option<i64>,
    #[serde(rename = "grau_formatado")]
    pub degree_label: Option<String>,
    pub tribunal: Option<Tribunal>,
    #[serde(rename = "segredo_justica")]
    pub under_seal: Option<bool>,
    #[serde(rename = "arquivado")]
    pub archived: Option<bool>,
    #[serde(rename = "status_predito")]
    pub predicted_status: Option<String>,
    #[serde(rename = "data_ultima_movimentacao")]
    pub last_movement_date: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "capa")]
    pub cover: Option<Cover>,
    #[serde(rename = "envolvidos", default, deserialize_with = "null_as_default")]
    pub parties: Vec<InvolvedParty>,
    #[serde(rename = "tipos_envolvido_pesquisado", default, deserialize_with = "null_as_default")]
    pub searched_party_types: Vec<SearchedPartyType>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Tribunal {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "sigla")]
    pub acronym: Option<String>,
}

/// Case metadata (`capa`).
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Cover {
    #[serde(rename = "assuntos_normalizados", default, deserialize_with = "null_as_default")]
    pub subjects: Vec<Subject>,
    #[serde(rename = "classe")]
    pub class: Option<String>,
    #[serde(rename = "assunto")]
    pub subject: Option<String>,
    pub area: Option<String>,
    #[serde(rename = "orgao_julgador")]
    pub adjudicating_body: Option<String>,
    #[serde(rename = "data_distribuicao")]
    pub distribution_date: Option<String>,
    #[serde(rename = "data_arquivamento")]
    pub archiving_date: Option<String>,
    #[serde(rename = "assunto_principal_normalizado")]
    pub primary_subject: Option<Subject>,
    #[serde(rename = "valor_causa")]
    pub case_value: Option<CaseValue>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Subject {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "nome_com_pai")]
    pub name_with_parent: Option<String>,
    #[serde(rename = "path_completo")]
    pub full_path: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct CaseValue {
    #[serde(rename = "valor")]
    pub amount: Option<Scalar>,
}

/// A case participant (`envolvido`).
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct InvolvedParty {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "tipo_normalizado")]
    pub normalized_kind: Option<String>,
    #[serde(rename = "tipo")]
    pub kind: Option<String>,
}

/// How the searched identifier takes part in a source.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct SearchedPartyType {
    #[serde(rename = "tipo_normalizado")]
    pub normalized_kind: Option<String>,
    #[serde(rename = "polo")]
    pub side: Option<String>,
}

/// A value the API sends as either a JSON string or a number.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Bool(b) => f.write_str(if *b { "True" } else { "False" }),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self { Scalar::Text(s!(s)) }
}
