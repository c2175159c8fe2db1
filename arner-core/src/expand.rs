//! # Expansão do Dataset — Visões de Treino e Decodificação
//!
//! Um modelo de sequência precisa de dois datasets diferentes a partir do
//! mesmo corpus:
//!
//! - **Visão de treino**: um registro por token, condicionado ao label
//!   anterior *verdadeiro* — a cadeia real observada no corpus.
//! - **Visão de decodificação**: o decodificador (Viterbi) não conhece o
//!   label anterior de antemão e precisa pontuar *todas* as transições.
//!   Para cada posição `i > 0`, geramos um registro por label distinto
//!   visto no corpus; a posição 0 usa só a sentinela de início.
//!
//! A explosão combinatória da decodificação tem tamanho fechado:
//! `1 + (N-1) * L` registros para `N` tokens e `L` labels distintos.
//! [`DecodeExpansion`] materializa esse contrato como um iterador finito
//! com `size_hint` exato, em vez de um laço aninhado opaco.
//!
//! Nenhuma expansão altera os registros de entrada, e o motor de features
//! só enxerga labels através do parâmetro explícito `previous_label`.

use rayon::prelude::*;

use crate::datum::{Datum, OUTSIDE_LABEL};
use crate::features::FeatureEngine;

/// Expansão de treino: passada linear única com o label anterior verdadeiro.
///
/// Produz exatamente um registro enriquecido por registro de entrada, na
/// mesma ordem. O label corrente vira o `previous_label` da próxima
/// posição; a posição 0 recebe a sentinela [`OUTSIDE_LABEL`].
pub fn expand_train(engine: &FeatureEngine, data: &[Datum]) -> Vec<Datum> {
    let words: Vec<String> = data.iter().map(|d| d.word.clone()).collect();

    let mut enriched = Vec::with_capacity(data.len());
    let mut previous_label = OUTSIDE_LABEL.to_string();

    for (position, datum) in data.iter().enumerate() {
        let mut output = Datum::new(datum.word.clone(), datum.label.clone());
        output.features = engine.compute_features(&words, &previous_label, position);
        output.previous_label = Some(previous_label.clone());
        enriched.push(output);

        previous_label = datum.label.clone();
    }

    enriched
}

/// Expansão de decodificação: coleta o iterador [`DecodeExpansion`].
///
/// Tamanho do resultado: `1 + (N-1) * L`, ordem posição-major e, dentro de
/// cada posição, a ordem de primeira ocorrência dos labels no corpus.
pub fn expand_test(engine: &FeatureEngine, data: &[Datum]) -> Vec<Datum> {
    DecodeExpansion::new(engine, data).collect()
}

/// Expande sequências independentes de treino em paralelo.
///
/// Cada sequência é autocontida e o motor não tem estado mutável, então a
/// distribuição via rayon não exige sincronização extra. A ordem das
/// sequências do resultado espelha a entrada.
pub fn expand_train_batch(engine: &FeatureEngine, sequences: &[Vec<Datum>]) -> Vec<Vec<Datum>> {
    sequences
        .par_iter()
        .map(|sequence| expand_train(engine, sequence))
        .collect()
}

/// Expande sequências independentes de decodificação em paralelo.
pub fn expand_test_batch(engine: &FeatureEngine, sequences: &[Vec<Datum>]) -> Vec<Vec<Datum>> {
    sequences
        .par_iter()
        .map(|sequence| expand_test(engine, sequence))
        .collect()
}

/// Construtor explícito da expansão combinatória de decodificação.
///
/// Na construção, varre os registros uma vez e monta o índice de labels:
/// os labels distintos do corpus, na ordem em que apareceram pela primeira
/// vez. A iteração então produz, de forma preguiçosa:
///
/// - posição 0: um único registro com a sentinela [`OUTSIDE_LABEL`];
/// - posição `i > 0`: um registro por label do índice, na ordem do índice.
///
/// O iterador é finito e de tamanho conhecido ([`expected_len`] e
/// `size_hint` exato), tornando o contrato `1 + (N-1) * L` uma
/// propriedade de primeira classe.
///
/// [`expected_len`]: DecodeExpansion::expected_len
pub struct DecodeExpansion<'a> {
    engine: &'a FeatureEngine,
    data: &'a [Datum],
    words: Vec<String>,
    /// Índice de labels: distintos, em ordem de primeira ocorrência.
    labels: Vec<String>,
    position: usize,
    label_cursor: usize,
}

impl<'a> DecodeExpansion<'a> {
    pub fn new(engine: &'a FeatureEngine, data: &'a [Datum]) -> Self {
        let words = data.iter().map(|d| d.word.clone()).collect();

        let mut labels: Vec<String> = Vec::new();
        for datum in data {
            if !labels.contains(&datum.label) {
                labels.push(datum.label.clone());
            }
        }

        Self {
            engine,
            data,
            words,
            labels,
            position: 0,
            label_cursor: 0,
        }
    }

    /// Labels distintos do corpus, na ordem de primeira ocorrência.
    pub fn distinct_labels(&self) -> &[String] {
        &self.labels
    }

    /// Tamanho total da expansão: `1 + (N-1) * L` (0 para corpus vazio).
    pub fn expected_len(&self) -> usize {
        match self.data.len() {
            0 => 0,
            n => 1 + (n - 1) * self.labels.len(),
        }
    }

    /// Quantos registros ainda serão produzidos a partir do estado atual.
    fn remaining(&self) -> usize {
        let n = self.data.len();
        if self.position >= n {
            return 0;
        }
        if self.position == 0 {
            return self.expected_len();
        }
        let later_positions = (n - 1 - self.position) * self.labels.len();
        later_positions + (self.labels.len() - self.label_cursor)
    }
}

impl Iterator for DecodeExpansion<'_> {
    type Item = Datum;

    fn next(&mut self) -> Option<Datum> {
        if self.position >= self.data.len() {
            return None;
        }

        let datum = &self.data[self.position];
        let previous_label = if self.position == 0 {
            OUTSIDE_LABEL
        } else {
            &self.labels[self.label_cursor]
        };

        let mut output = Datum::new(datum.word.clone(), datum.label.clone());
        output.features = self
            .engine
            .compute_features(&self.words, previous_label, self.position);
        output.previous_label = Some(previous_label.to_string());

        // Avança o cursor combinatório: labels dentro da posição, depois a posição.
        if self.position == 0 {
            self.position = 1;
            self.label_cursor = 0;
        } else {
            self.label_cursor += 1;
            if self.label_cursor >= self.labels.len() {
                self.label_cursor = 0;
                self.position += 1;
            }
        }

        Some(output)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DecodeExpansion<'_> {}
