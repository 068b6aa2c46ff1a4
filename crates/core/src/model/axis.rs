//! Static diagnosis catalog: the eight business axes, their questions,
//! and the fixed set of mentoring programs.
//!
//! The catalog is defined at process start and never mutated. Axis and
//! question order is significant: the diagnosis wizard walks it exactly
//! as declared here.

/// A single diagnosis question inside an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
}

/// One of the eight fixed business-maturity axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Axis {
    pub id: &'static str,
    pub name: &'static str,
    pub questions: &'static [Question],
}

/// A mentoring program a mentee belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Program {
    pub id: &'static str,
    pub name: &'static str,
}

/// Fixed program catalog.
pub const PROGRAMS: [Program; 3] = [
    Program {
        id: "prog-start",
        name: "START",
    },
    Program {
        id: "prog-exclusive",
        name: "EXCLUSIVE",
    },
    Program {
        id: "prog-hibrido",
        name: "HÍBRIDO",
    },
];

/// Program pre-selected when the wizard starts.
pub const DEFAULT_PROGRAM_ID: &str = "prog-start";

impl Program {
    /// Looks up a program by id.
    #[must_use]
    pub fn by_id(id: &str) -> Option<Program> {
        PROGRAMS.iter().copied().find(|p| p.id == id)
    }
}

impl Axis {
    /// Looks up an axis by id.
    #[must_use]
    pub fn by_id(id: &str) -> Option<Axis> {
        DIAGNOSIS_AXES.iter().copied().find(|a| a.id == id)
    }
}

/// The ordered axis catalog used by every diagnosis session.
pub const DIAGNOSIS_AXES: [Axis; 8] = [
    Axis {
        id: "socios",
        name: "Sócios",
        questions: &[
            Question {
                id: "q1",
                text: "Possui acordo de sócios ou quotistas formalmente estabelecido?",
            },
            Question {
                id: "q2",
                text: "Como são tomadas as decisões estratégicas entre os sócios?",
            },
            Question {
                id: "q3",
                text: "Existe clareza na divisão de responsabilidades e papéis de cada sócio?",
            },
            Question {
                id: "q4",
                text: "Como é feita a remuneração dos sócios (pró-labore, distribuição de lucros)?",
            },
            Question {
                id: "q5",
                text: "Há reuniões periódicas entre os sócios para alinhamento?",
            },
        ],
    },
    Axis {
        id: "financas",
        name: "Finanças",
        questions: &[
            Question {
                id: "q1",
                text: "Possui controle de fluxo de caixa atualizado?",
            },
            Question {
                id: "q2",
                text: "Como é feito o controle de contas a pagar e a receber?",
            },
            Question {
                id: "q3",
                text: "Tem clareza sobre a margem de contribuição de cada serviço/produto?",
            },
            Question {
                id: "q4",
                text: "Realiza conciliação bancária regularmente?",
            },
            Question {
                id: "q5",
                text: "Possui relatórios financeiros (DRE, Balanço) atualizados?",
            },
        ],
    },
    Axis {
        id: "folha",
        name: "Folha",
        questions: &[
            Question {
                id: "q1",
                text: "Como é feito o controle de ponto dos funcionários?",
            },
            Question {
                id: "q2",
                text: "Possui organização da documentação trabalhista (contratos, admissões, demissões)?",
            },
            Question {
                id: "q3",
                text: "Como são calculados e controlados os encargos trabalhistas?",
            },
            Question {
                id: "q4",
                text: "Tem clareza sobre o custo total de cada colaborador?",
            },
            Question {
                id: "q5",
                text: "Possui política clara de benefícios e remuneração?",
            },
        ],
    },
    Axis {
        id: "clientes",
        name: "Clientes",
        questions: &[
            Question {
                id: "q1",
                text: "Possui cadastro organizado de todos os clientes?",
            },
            Question {
                id: "q2",
                text: "Como é feito o acompanhamento do histórico de atendimento?",
            },
            Question {
                id: "q3",
                text: "Realiza pesquisas de satisfação regularmente?",
            },
            Question {
                id: "q4",
                text: "Tem processo definido para tratamento de reclamações?",
            },
            Question {
                id: "q5",
                text: "Como é feita a segmentação e análise do perfil dos clientes?",
            },
        ],
    },
    Axis {
        id: "vendas",
        name: "Vendas",
        questions: &[
            Question {
                id: "q1",
                text: "Possui funil de vendas estruturado?",
            },
            Question {
                id: "q2",
                text: "Como é feito o controle de propostas enviadas?",
            },
            Question {
                id: "q3",
                text: "Tem metas de vendas definidas por período?",
            },
            Question {
                id: "q4",
                text: "Como é feito o follow-up de oportunidades?",
            },
            Question {
                id: "q5",
                text: "Possui indicadores de performance de vendas (taxa de conversão, ticket médio)?",
            },
        ],
    },
    Axis {
        id: "ia_automacao",
        name: "IA & Automação",
        questions: &[
            Question {
                id: "q1",
                text: "Utiliza alguma ferramenta de automação de processos?",
            },
            Question {
                id: "q2",
                text: "Como é feita a comunicação com clientes (manual ou automatizada)?",
            },
            Question {
                id: "q3",
                text: "Possui integração entre os sistemas utilizados?",
            },
            Question {
                id: "q4",
                text: "Utiliza ou planeja utilizar IA em algum processo?",
            },
            Question {
                id: "q5",
                text: "Tem processos repetitivos que poderiam ser automatizados?",
            },
        ],
    },
    Axis {
        id: "reforma_tributaria",
        name: "Reforma Tributária",
        questions: &[
            Question {
                id: "q1",
                text: "Está acompanhando as mudanças da reforma tributária?",
            },
            Question {
                id: "q2",
                text: "Sabe como a reforma pode impactar seu negócio?",
            },
            Question {
                id: "q3",
                text: "Possui planejamento tributário estruturado?",
            },
            Question {
                id: "q4",
                text: "Tem assessoria especializada em questões tributárias?",
            },
            Question {
                id: "q5",
                text: "Realiza análise periódica de regime tributário (Simples, Lucro Presumido, Real)?",
            },
        ],
    },
    Axis {
        id: "estrategia",
        name: "Estratégia",
        questions: &[
            Question {
                id: "q1",
                text: "Possui planejamento estratégico formalizado?",
            },
            Question {
                id: "q2",
                text: "Tem metas e objetivos claros para os próximos 12 meses?",
            },
            Question {
                id: "q3",
                text: "Como é feito o acompanhamento das metas?",
            },
            Question {
                id: "q4",
                text: "Possui indicadores-chave de performance (KPIs) definidos?",
            },
            Question {
                id: "q5",
                text: "Realiza análise de concorrência e mercado regularmente?",
            },
        ],
    },
];

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_eight_axes_of_five_questions() {
        assert_eq!(DIAGNOSIS_AXES.len(), 8);
        for axis in &DIAGNOSIS_AXES {
            assert_eq!(axis.questions.len(), 5, "axis {}", axis.id);
        }
    }

    #[test]
    fn axis_ids_are_unique() {
        for (i, a) in DIAGNOSIS_AXES.iter().enumerate() {
            for b in &DIAGNOSIS_AXES[i + 1..] {
                assert_ne!(a.id, b.id);
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn axis_order_is_fixed() {
        let names: Vec<_> = DIAGNOSIS_AXES.iter().map(|a| a.name).collect();
        assert_eq!(
            names,
            vec![
                "Sócios",
                "Finanças",
                "Folha",
                "Clientes",
                "Vendas",
                "IA & Automação",
                "Reforma Tributária",
                "Estratégia"
            ]
        );
    }

    #[test]
    fn program_lookup() {
        assert_eq!(Program::by_id("prog-start").unwrap().name, "START");
        assert_eq!(Program::by_id(DEFAULT_PROGRAM_ID).unwrap().id, "prog-start");
        assert!(Program::by_id("prog-unknown").is_none());
    }

    #[test]
    fn axis_lookup() {
        assert_eq!(Axis::by_id("financas").unwrap().name, "Finanças");
        assert!(Axis::by_id("marketing").is_none());
    }
}
