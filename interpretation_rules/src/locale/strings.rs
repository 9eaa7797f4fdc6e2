//! String tables.

use super::TextKey;

pub(super) fn english(key: TextKey) -> &'static str {
    match key {
        TextKey::Title => "RADICAL INTERPRETER",
        TextKey::Tagline => "A simulation of Donald Davidson's philosophy of language. Build a Truth-Theory for an unknown language using only observable behavior.",
        TextKey::CoreDirectives => "CORE DIRECTIVES:",
        TextKey::DirectiveObservation => "Observation: Watch the alien interact with the world.",
        TextKey::DirectiveTSchema => "T-Schema: Define truth conditions (\"X is true iff Y\").",
        TextKey::DirectiveCharity => "Charity: Assume the alien is rational and truth-telling.",
        TextKey::BeginSimulation => "BEGIN SIMULATION",

        TextKey::GeneratingScenario => "GENERATING SCENARIO DATA...",
        TextKey::ObservationLog => "LOG: {current}/{total}",
        TextKey::LogEntry => "LOG #{id}",
        TextKey::NextObservation => "NEXT OBSERVATION",
        TextKey::SubmitForReview => "SUBMIT FOR REVIEW",
        TextKey::NewSimulation => "NEW SIMULATION",
        TextKey::PeerReviewing => "PEER REVIEWING T-THEORY...",
        TextKey::TheoryBuilder => "T-THEORY BUILDER",
        TextKey::TheoryInstruction => "Complete the T-Sentence for each observed utterance. Formal structure: 's' is True <-> p",
        TextKey::IsTrueIff => "\"{utterance}\" is true if and only if...",
        TextKey::LevelLabel => "LEVEL {level}/{total}",

        TextKey::TheoryAccepted => "THEORY ACCEPTED",
        TextKey::TheoryRejected => "THEORY REJECTED",
        TextKey::CoherenceScore => "COHERENCE SCORE: {score}/100",
        TextKey::PeerReviewFeedback => "PEER REVIEW FEEDBACK",
        TextKey::IndeterminacyNote => "INDETERMINACY NOTE",
        TextKey::IndeterminacyQuote => "\"Even if a theory fits all data, other theories might also fit.\"",
        TextKey::Takeaways => "KEY TAKEAWAYS",
        TextKey::ReviseTheory => "REVISE CURRENT THEORY",
        TextKey::NextLevel => "NEXT LEVEL",
        TextKey::AllLevelsComplete => "ALL LEVELS COMPLETE. Your field work is done.",

        TextKey::FinalReport => "FINAL FIELD REPORT",
        TextKey::LexiconIntro => "The compiled lexicon of every language you interpreted.",
        TextKey::MetaReflection => "META-REFLECTION",
        TextKey::ReflectionIntro => "Throughout this campaign you used one language to state the truth conditions of another.",
        TextKey::ObjectLanguageTitle => "OBJECT LANGUAGE",
        TextKey::ObjectLanguageDesc => "The alien tongue: the language being interpreted.",
        TextKey::TSchemaTitle => "T-SCHEMA",
        TextKey::TSchemaDesc => "The bridge: 's' is true if and only if p.",
        TextKey::MetaLanguageTitle => "META-LANGUAGE",
        TextKey::MetaLanguageDesc => "Your own language: the one in which the truth conditions are stated.",
        TextKey::RestartCampaign => "RESTART CAMPAIGN",
        TextKey::AverageScore => "AVERAGE COHERENCE: {score}/100",

        TextKey::ManualTitle => "FIELD MANUAL: RADICAL INTERPRETATION",
        TextKey::ManualGoalTitle => "1. The Goal: Truth Conditions",
        TextKey::ManualGoalBody => "You cannot know what a word means directly. You can only observe under what conditions a sentence is True.\n  Classic T-Schema: \"Sentence S\" is True <-> (if and only if) P\n  Example: \"'Es regnet' is True if and only if it is raining.\"\nYour job is to fill in the right-hand side (P) for the alien's words.",
        TextKey::ManualCharityTitle => "2. The Tool: Principle of Charity",
        TextKey::ManualCharityBody => "When you encounter a new language, you must assume the speaker is Rational and mostly Correct about their environment.\n  - If the alien says \"Gavagai\" when a rabbit passes, assume they are talking about the rabbit, not \"undetached rabbit parts\" or \"temporal slices of rabbithood\" (at first).\n  - Maximize the truth of their statements. If your theory makes the alien a liar 90% of the time, your theory is wrong.",
        TextKey::ManualIndeterminacyTitle => "3. The Problem: Indeterminacy",
        TextKey::ManualIndeterminacyBody => "Sometimes, two different theories fit all the evidence perfectly. Does \"Gavagai\" mean Rabbit or Food? If the alien only ever sees rabbits when it is hungry, you might never know. This is the Indeterminacy of Translation.",

        TextKey::SubjectPrefix => "Subject",
        TextKey::FeedbackExceptional => "Your interpretation maximizes the rationality of the speaker. Excellent application of the Principle of Charity.",
        TextKey::FeedbackPartial => "Your theory is largely coherent, though some truth conditions remain obscure.",
        TextKey::FeedbackPoor => "Your interpretation attributes too many false beliefs to the speaker. Revisit the Principle of Charity.",
        TextKey::FirstFailure => "For \"{utterance}\" you wrote \"{text}\", which does not make the alien's assertion true.",
        TextKey::VerdictPass => "[PASS] \"{utterance}\": your T-Sentence corresponds to observed reality.",
        TextKey::VerdictFail => "[FAIL] \"{utterance}\": does not satisfy its truth conditions (see Log #{id}). Missing concepts: {missing}.",
        TextKey::AlternativeTheory => "Indeterminacy Note: Even if your definitions fit, a 'Rabbit-Part' theory might also fit logically! Meanings are composed from parts, yet we can never be 100% certain of reference.",
        TextKey::EvaluationUnavailable => "Evaluation service unavailable, and no local solution exists for this scenario. Your theory could not be reviewed.",

        TextKey::Help => "Commands: start [level] | next | define <n> <text> | theory | submit | retry | advance | report | restart | lang <en|es> | manual | help | quit",
        TextKey::ActionDenied => "That action is not available right now",
        TextKey::UnknownCommand => "Unknown command. Type 'help'.",
    }
}

pub(super) fn spanish(key: TextKey) -> &'static str {
    match key {
        TextKey::Title => "INTÉRPRETE RADICAL",
        TextKey::Tagline => "Una simulación de la filosofía del lenguaje de Donald Davidson. Construye una Teoría de la Verdad para un lenguaje desconocido usando solo conducta observable.",
        TextKey::CoreDirectives => "DIRECTIVAS PRINCIPALES:",
        TextKey::DirectiveObservation => "Observación: Mira cómo el alienígena interactúa con el mundo.",
        TextKey::DirectiveTSchema => "Esquema-T: Define condiciones de verdad (\"X es verdadero sii Y\").",
        TextKey::DirectiveCharity => "Caridad: Asume que el alienígena es racional y dice la verdad.",
        TextKey::BeginSimulation => "INICIAR SIMULACIÓN",

        TextKey::GeneratingScenario => "GENERANDO DATOS DEL ESCENARIO...",
        TextKey::ObservationLog => "REGISTRO: {current}/{total}",
        TextKey::LogEntry => "REGISTRO #{id}",
        TextKey::NextObservation => "SIGUIENTE OBSERVACIÓN",
        TextKey::SubmitForReview => "ENVIAR A REVISIÓN",
        TextKey::NewSimulation => "NUEVA SIMULACIÓN",
        TextKey::PeerReviewing => "REVISANDO LA TEORÍA-T...",
        TextKey::TheoryBuilder => "CONSTRUCTOR DE TEORÍA-T",
        TextKey::TheoryInstruction => "Completa la oración-T para cada emisión observada. Estructura formal: 's' es Verdadera <-> p",
        TextKey::IsTrueIff => "\"{utterance}\" es verdadera si y solo si...",
        TextKey::LevelLabel => "NIVEL {level}/{total}",

        TextKey::TheoryAccepted => "TEORÍA ACEPTADA",
        TextKey::TheoryRejected => "TEORÍA RECHAZADA",
        TextKey::CoherenceScore => "PUNTUACIÓN DE COHERENCIA: {score}/100",
        TextKey::PeerReviewFeedback => "COMENTARIOS DE LA REVISIÓN",
        TextKey::IndeterminacyNote => "NOTA DE INDETERMINACIÓN",
        TextKey::IndeterminacyQuote => "\"Aunque una teoría encaje con todos los datos, otras teorías también podrían encajar.\"",
        TextKey::Takeaways => "LECCIONES CLAVE",
        TextKey::ReviseTheory => "REVISAR TEORÍA ACTUAL",
        TextKey::NextLevel => "SIGUIENTE NIVEL",
        TextKey::AllLevelsComplete => "TODOS LOS NIVELES COMPLETADOS. Tu trabajo de campo ha terminado.",

        TextKey::FinalReport => "INFORME DE CAMPO FINAL",
        TextKey::LexiconIntro => "El léxico compilado de cada lenguaje que interpretaste.",
        TextKey::MetaReflection => "META-REFLEXIÓN",
        TextKey::ReflectionIntro => "A lo largo de esta campaña usaste un lenguaje para enunciar las condiciones de verdad de otro.",
        TextKey::ObjectLanguageTitle => "LENGUAJE OBJETO",
        TextKey::ObjectLanguageDesc => "La lengua alienígena: el lenguaje que se interpreta.",
        TextKey::TSchemaTitle => "ESQUEMA-T",
        TextKey::TSchemaDesc => "El puente: 's' es verdadera si y solo si p.",
        TextKey::MetaLanguageTitle => "METALENGUAJE",
        TextKey::MetaLanguageDesc => "Tu propio lenguaje: aquel en el que se enuncian las condiciones de verdad.",
        TextKey::RestartCampaign => "REINICIAR CAMPAÑA",
        TextKey::AverageScore => "COHERENCIA MEDIA: {score}/100",

        TextKey::ManualTitle => "MANUAL DE CAMPO: INTERPRETACIÓN RADICAL",
        TextKey::ManualGoalTitle => "1. El Objetivo: Condiciones de Verdad",
        TextKey::ManualGoalBody => "No puedes saber directamente lo que significa una palabra. Solo puedes observar en qué condiciones una oración es Verdadera.\n  Esquema-T clásico: \"Oración S\" es Verdadera <-> (si y solo si) P\n  Ejemplo: \"'Es regnet' es Verdadera si y solo si está lloviendo.\"\nTu trabajo es completar el lado derecho (P) para las palabras del alienígena.",
        TextKey::ManualCharityTitle => "2. La Herramienta: Principio de Caridad",
        TextKey::ManualCharityBody => "Al encontrar un lenguaje nuevo, debes suponer que el hablante es Racional y en general Acertado sobre su entorno.\n  - Si el alienígena dice \"Gavagai\" cuando pasa un conejo, supón que habla del conejo, no de \"partes no separadas de conejo\" ni de \"segmentos temporales de conejidad\" (al principio).\n  - Maximiza la verdad de sus afirmaciones. Si tu teoría convierte al alienígena en un mentiroso el 90% del tiempo, tu teoría está equivocada.",
        TextKey::ManualIndeterminacyTitle => "3. El Problema: Indeterminación",
        TextKey::ManualIndeterminacyBody => "A veces, dos teorías distintas encajan perfectamente con toda la evidencia. ¿\"Gavagai\" significa Conejo o Comida? Si el alienígena solo ve conejos cuando tiene hambre, quizá nunca lo sepas. Esta es la Indeterminación de la Traducción.",

        TextKey::SubjectPrefix => "Sujeto",
        TextKey::FeedbackExceptional => "Tu interpretación maximiza la racionalidad del hablante. Excelente aplicación del Principio de Caridad.",
        TextKey::FeedbackPartial => "Tu teoría es mayormente coherente, aunque algunas condiciones de verdad siguen siendo oscuras.",
        TextKey::FeedbackPoor => "Tu interpretación atribuye demasiadas creencias falsas al hablante. Revisa el Principio de Caridad.",
        TextKey::FirstFailure => "Para \"{utterance}\" escribiste \"{text}\", lo cual no hace verdadera la afirmación del alienígena.",
        TextKey::VerdictPass => "[BIEN] \"{utterance}\": tu oración-T corresponde con la realidad observada.",
        TextKey::VerdictFail => "[MAL] \"{utterance}\": no satisface sus condiciones de verdad (ver Registro #{id}). Conceptos faltantes: {missing}.",
        TextKey::AlternativeTheory => "Nota de Indeterminación: Aunque tus definiciones encajen, ¡una teoría de 'Partes-de-Conejo' también podría encajar lógicamente! Los significados se componen de partes, pero nunca podemos estar 100% seguros de la referencia.",
        TextKey::EvaluationUnavailable => "Servicio de evaluación no disponible, y no existe una solución local para este escenario. Tu teoría no pudo ser revisada.",

        TextKey::Help => "Comandos: start [nivel] | next | define <n> <texto> | theory | submit | retry | advance | report | restart | lang <en|es> | manual | help | quit",
        TextKey::ActionDenied => "Esa acción no está disponible ahora",
        TextKey::UnknownCommand => "Comando desconocido. Escribe 'help'.",
    }
}
