//! System instructions and prompt builders for the primary ports.
//!
//! All prompts are Brazilian Portuguese — the service's single working
//! language. Classification is forced into a two-label answer; the reply
//! instructions differ only in tone.

use crate::pipeline::types::Category;

/// System instruction for the classification call.
pub const CLASSIFICATION_INSTRUCTION: &str = "\
Você é um classificador especializado de emails corporativos.

Sua tarefa é classificar emails em APENAS duas categorias:

**PRODUTIVO**: emails de trabalho e negócios — solicitações, reuniões, \
documentos, processos seletivos, status de projetos, prazos, propostas, \
orçamentos, contratos, aprovações, pendências, questões técnicas ou \
administrativas; qualquer assunto que exija ação profissional.

**IMPRODUTIVO**: emails sociais, pessoais ou de cortesia — felicitações \
(aniversário, natal, ano novo, casamento), cumprimentos sem contexto \
profissional, agradecimentos simples, conversas pessoais, confirmações \
automáticas de pagamento, propagandas e SPAM, avisos de alteração de senha.

IMPORTANTE:
- Menção a \"processo seletivo\", \"vaga\", \"entrevista\", \"aprovado\" ou \
\"candidatura\" → PRODUTIVO
- \"Parabéns\" por aprovação profissional → PRODUTIVO
- Felicitação social sem contexto de negócios → IMPRODUTIVO

Responda APENAS com uma destas opções exatas:
- \"Produtivo\"
- \"Improdutivo\"

Não adicione explicações, apenas a categoria.";

/// System instruction for reply generation to Unproductive emails.
pub const UNPRODUCTIVE_RESPONSE_INSTRUCTION: &str = "\
Você é um assistente de email amigável em português brasileiro.

Escreva respostas calorosas, naturais e pessoais para emails sociais.

Regras:
- Seja cordial, empático e humano
- Use tom informal mas respeitoso
- Mantenha a resposta em 2-3 frases
- Retribua o sentimento do remetente
- Não use jargões corporativos
- Não mencione que você é uma IA";

/// System instruction for reply generation to Productive emails.
pub const PRODUCTIVE_RESPONSE_INSTRUCTION: &str = "\
Você é um assistente de email profissional em português brasileiro.

Escreva respostas objetivas, informativas e profissionais.

Regras:
- Seja formal mas cordial
- Confirme o recebimento do email
- Indique próximos passos quando relevante
- Responda sempre em pt-br
- Não mencione que você é uma IA";

/// Pick the response instruction for a category.
pub fn response_instruction(category: Category) -> &'static str {
    match category {
        Category::Productive => PRODUCTIVE_RESPONSE_INSTRUCTION,
        Category::Unproductive => UNPRODUCTIVE_RESPONSE_INSTRUCTION,
    }
}

/// User prompt for the classification call.
pub fn classification_prompt(subject: &str, body: &str) -> String {
    format!(
        "Classifique este email:\n\n\
         **Assunto:** {subject}\n\n\
         **Corpo do email:**\n{body}\n\n\
         **Categoria:**"
    )
}

/// User prompt for the reply-generation call.
pub fn response_prompt(
    category: Category,
    sender_name: &str,
    subject: &str,
    body: &str,
    keywords: &[String],
) -> String {
    let closing = match category {
        Category::Productive => "Confirme o recebimento de forma profissional.",
        Category::Unproductive => "Seja caloroso e natural.",
    };
    format!(
        "Responda este email:\n\n\
         **De:** {sender_name}\n\
         **Assunto:** {subject}\n\
         **Mensagem:** {body}\n\n\
         **Palavras-chave identificadas:** {}\n\n\
         {closing}",
        keywords.join(", ")
    )
}
