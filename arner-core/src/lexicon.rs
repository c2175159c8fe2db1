//! # Léxico de Nomes Conhecidos
//!
//! Conjunto estático de nomes de entidades (ex: nomes próprios frequentes
//! em notícias) usado como fonte de features de membership: "esta palavra
//! é um nome conhecido?".
//!
//! O léxico é um valor construído explicitamente e **injetado** no motor
//! de features, não estado global de processo. Isso permite testes
//! determinísticos com léxicos sintéticos e execução paralela sem
//! globais compartilhados. Depois de construído é somente-leitura.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{ArnerError, Result};

/// Conjunto somente-leitura de nomes conhecidos.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    names: HashSet<String>,
}

impl Lexicon {
    /// Carrega o léxico de um arquivo com um nome por linha.
    ///
    /// Espaços nas bordas são removidos e linhas vazias descartadas.
    /// Arquivo ilegível é um erro fatal: não existe modo degradado válido,
    /// já que as features derivadas do léxico avaliariam `false` de forma
    /// silenciosa e inconsistente.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ArnerError::Lexicon {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_lines(content.lines()))
    }

    /// Constrói um léxico em memória. Útil para testes com léxicos sintéticos.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();
        Self { names }
    }

    /// Teste de pertencimento: a palavra está no léxico?
    pub fn contains(&self, word: &str) -> bool {
        self.names.contains(word)
    }

    /// Quantidade de nomes carregados.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
