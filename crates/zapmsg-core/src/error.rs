use thiserror::Error;

use crate::contact::ContactId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Por favor, insira pelo menos um contato.")]
    EmptyImport,

    #[error("Nenhum número válido encontrado. Use o formato: Nome, 5511999999999")]
    NoValidContacts,

    #[error("A mensagem está vazia.")]
    EmptyTemplate,

    #[error("Contact not found: {0}")]
    ContactNotFound(ContactId),

    #[error("Contact {0} is not pending")]
    NotPending(ContactId),
}

pub type Result<T> = std::result::Result<T, CoreError>;
