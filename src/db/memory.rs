// src/db/memory.rs

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

// Registro com chave textual.
pub trait Record: Clone + Send + Sync {
    fn id(&self) -> &str;
}

// ---
// Tabela em memória: um Vec protegido por RwLock + contador de IDs.
// A ordem do Vec é a ordem de exibição.
// ---
pub struct MemoryTable<T> {
    rows: RwLock<Vec<T>>,
    sequence: AtomicU64,
}

impl<T: Record> MemoryTable<T> {
    /// `last_sequence` é o maior número de ID já usado pelas linhas iniciais.
    pub fn new(rows: Vec<T>, last_sequence: u64) -> Self {
        Self {
            rows: RwLock::new(rows),
            sequence: AtomicU64::new(last_sequence),
        }
    }

    pub fn next_sequence(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub async fn all(&self) -> Vec<T> {
        self.rows.read().await.clone()
    }

    pub async fn find(&self, id: &str) -> Option<T> {
        self.rows.read().await.iter().find(|row| row.id() == id).cloned()
    }

    pub async fn push_back(&self, row: T) {
        self.rows.write().await.push(row);
    }

    pub async fn push_front(&self, row: T) {
        self.rows.write().await.insert(0, row);
    }

    /// Substitui no mesmo lugar; as demais linhas não são tocadas.
    pub async fn replace(&self, row: T) -> Option<T> {
        let mut rows = self.rows.write().await;
        let slot = rows.iter_mut().find(|existing| existing.id() == row.id())?;
        *slot = row.clone();
        Some(row)
    }

    /// Atualiza uma linha via closure e devolve a versão nova.
    pub async fn modify<F>(&self, id: &str, change: F) -> Option<T>
    where
        F: FnOnce(&mut T) + Send,
    {
        let mut rows = self.rows.write().await;
        let slot = rows.iter_mut().find(|existing| existing.id() == id)?;
        change(slot);
        Some(slot.clone())
    }

    /// Remove exatamente o ID pedido, preservando a ordem relativa do resto.
    pub async fn remove(&self, id: &str) -> Option<T> {
        let mut rows = self.rows.write().await;
        let index = rows.iter().position(|row| row.id() == id)?;
        Some(rows.remove(index))
    }
}
