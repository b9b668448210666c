// tests/common/mod.rs
//
// Shared fixtures: record builders and a scripted provider.
#![allow(dead_code)]

use std::collections::VecDeque;

use escavador_export::provider::{Page, RecordProvider};
use escavador_export::specs::{
    Case, Cover, InvolvedParty, SearchedPartyType, Source, Subject, Tribunal, CaseValue,
};
use escavador_export::ProviderError;

pub fn case(numero: &str, sources: Vec<Source>) -> Case {
    Case {
        cnj_number: Some(numero.into()),
        start_date: Some("2021-03-04".into()),
        active_side_title: Some("Autor".into()),
        passive_side_title: Some("Réu".into()),
        sources,
    }
}

pub fn source(sigla: &str) -> Source {
    Source {
        description: Some(format!("{sigla} - 1º grau")),
        name: Some(format!("Tribunal {sigla}")),
        acronym: Some(sigla.into()),
        kind: Some("TRIBUNAL".into()),
        degree: Some(1),
        degree_label: Some("Primeiro Grau".into()),
        tribunal: Some(Tribunal { name: Some(format!("Tribunal de Justiça {sigla}")), acronym: Some(sigla.into()) }),
        under_seal: Some(false),
        archived: Some(false),
        predicted_status: Some("ATIVO".into()),
        last_movement_date: Some("2024-01-10".into()),
        url: Some(format!("https://example.test/{sigla}")),
        ..Source::default()
    }
}

pub fn party(name: &str) -> InvolvedParty {
    InvolvedParty {
        name: Some(name.into()),
        normalized_kind: Some("Autor".into()),
        kind: Some("REQUERENTE".into()),
    }
}

pub fn searched(kind: &str, side: &str) -> SearchedPartyType {
    SearchedPartyType { normalized_kind: Some(kind.into()), side: Some(side.into()) }
}

pub fn full_cover() -> Cover {
    Cover {
        subjects: vec![Subject { name: Some("Indenização".into()), ..Subject::default() }],
        class: Some("Procedimento Comum Cível".into()),
        subject: Some("Indenização por Dano Moral".into()),
        area: Some("Cível".into()),
        adjudicating_body: Some("1ª Vara Cível".into()),
        distribution_date: Some("2021-03-04".into()),
        archiving_date: None,
        primary_subject: Some(Subject {
            name: Some("Indenização por Dano Moral".into()),
            name_with_parent: Some("Responsabilidade Civil > Indenização por Dano Moral".into()),
            full_path: Some("Direito Civil > Responsabilidade Civil > Indenização por Dano Moral".into()),
        }),
        case_value: Some(CaseValue { amount: Some("15000.00".into()) }),
    }
}

pub fn page(cases: Vec<Case>, next: Option<&str>) -> Page {
    Page::new(cases, next.map(String::from))
}

/// Replays a fixed script: first entry answers `search`, the rest answer
/// `continue_search` in order. Records every call.
pub struct ScriptedProvider {
    script: VecDeque<Result<Option<Page>, ProviderError>>,
    pub searches: Vec<String>,
    pub continuations: usize,
}

impl ScriptedProvider {
    pub fn new(script: Vec<Result<Option<Page>, ProviderError>>) -> Self {
        Self { script: script.into(), searches: Vec::new(), continuations: 0 }
    }

    /// Pages chained through `next` handles, last one without.
    pub fn pages(pages: Vec<Vec<Case>>) -> Self {
        let n = pages.len();
        let script = pages
            .into_iter()
            .enumerate()
            .map(|(i, cases)| {
                let next = (i + 1 < n).then(|| format!("cursor-{}", i + 1));
                Ok(Some(Page::new(cases, next)))
            })
            .collect();
        Self::new(script)
    }
}

impl RecordProvider for ScriptedProvider {
    fn search(&mut self, identifier: &str) -> Result<Page, ProviderError> {
        self.searches.push(identifier.to_string());
        match self.script.pop_front() {
            Some(Ok(Some(p))) => Ok(p),
            Some(Ok(None)) | None => Ok(Page::default()),
            Some(Err(e)) => Err(e),
        }
    }

    fn continue_search(&mut self, page: &Page) -> Result<Option<Page>, ProviderError> {
        self.continuations += 1;
        if !page.has_next() && self.script.is_empty() {
            return Ok(None);
        }
        self.script.pop_front().unwrap_or(Ok(None))
    }
}
