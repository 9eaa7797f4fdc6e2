//! Spanish levels. Same vocabulary and logs as the English set, with
//! Spanish scene text and keywords.

use super::{Observation, Scenario};
use crate::locale::Language;

pub(crate) fn levels() -> Vec<Scenario> {
    vec![reference(), compositionality(), negation(), quantification()]
}

fn reference() -> Scenario {
    Scenario::new(Language::Spanish, "Arbóreo")
        .with_alien_name("Sujeto Quine")
        .with_vocabulary(["Gavagai", "Klaatu", "Barada", "Nikto"])
        .with_keywords(
            "Gavagai",
            ["conejo", "liebre", "conejito", "animal", "mamífero", "bicho", "roedor", "conejos"],
        )
        .with_keywords(
            "Klaatu",
            [
                "correr", "corre", "mover", "rápido", "ir", "huye", "escapa", "movimiento",
                "veloz", "marcha", "carrera",
            ],
        )
        .with_keywords(
            "Barada",
            [
                "tormenta", "lluvia", "trueno", "clima", "llueve", "llover", "tempestad", "rayo",
                "agua", "nublado", "aguacero",
            ],
        )
        .with_keywords(
            "Nikto",
            [
                "lobo", "depredador", "peligro", "enemigo", "bestia", "canino", "perro", "amenaza",
                "cazador",
            ],
        )
        .with_takeaway("La Verdad es lo Primitivo: No empezamos con la referencia (vínculos palabra-objeto). Empezamos asumiendo que las *oraciones* del alienígena son verdaderas en las circunstancias observadas.")
        .with_takeaway("La Referencia es Teórica: No podemos ver la 'referencia'. Mapear 'Gavagai' a conejos es solo un movimiento teórico para explicar por qué la oración es verdadera.")
        .with_takeaway("Indeterminación: ¿'Gavagai' significa 'Conejo' o 'Parte no separada de conejo'? Mientras las oraciones-T sean verdaderas, la referencia específica permanece inescrutable.")
        .with_observation(Observation::new(
            1,
            "Un conejo blanco corre rápidamente por la hierba alta.",
            "🐇🌿💨",
            "Gavagai",
            "Hay un conejo.",
        ))
        .with_observation(Observation::new(
            2,
            "El conejo se sienta perfectamente quieto, moviendo su nariz.",
            "🐇🛑",
            "Gavagai",
            "Hay un conejo (sentado).",
        ))
        .with_observation(Observation::new(
            3,
            "Un lobo aparece en la cresta. El alienígena señala frenéticamente.",
            "🐺😱",
            "Nikto",
            "Hay un lobo.",
        ))
        .with_observation(Observation::new(
            4,
            "El conejo ve al lobo y huye.",
            "🐇💨🐺",
            "Klaatu",
            "Algo está corriendo.",
        ))
        .with_observation(Observation::new(
            5,
            "Nubes oscuras se juntan, truenos retumban y cae lluvia.",
            "☁️⚡🌧️",
            "Barada",
            "Hay tormenta.",
        ))
        .with_observation(Observation::new(
            6,
            "El lobo huye de la lluvia.",
            "🐺💨🌧️",
            "Klaatu",
            "Eso (el lobo) está corriendo.",
        ))
}

fn compositionality() -> Scenario {
    Scenario::new(Language::Spanish, "Basáltico")
        .with_alien_name("Sujeto Tarski")
        .with_vocabulary(["Gorm", "Vell", "Ruz", "Zul"])
        .with_keywords(
            "Gorm",
            ["piedra", "roca", "mineral", "guijarro", "piedras", "rocas", "pedrusco"],
        )
        .with_keywords(
            "Vell",
            ["cielo", "aire", "nube", "arriba", "atmósfera", "celeste", "firmamento", "espacio"],
        )
        .with_keywords(
            "Ruz",
            ["rojo", "carmesí", "escarlata", "rubí", "colorado", "rojizo", "sangre"],
        )
        .with_keywords(
            "Zul",
            ["azul", "celeste", "cian", "azulado", "zafiro", "marino", "turquesa"],
        )
        .with_takeaway("Composicionalidad: El significado de 'Ruz Gorm' depende del significado de 'Ruz' más 'Gorm'.")
        .with_takeaway("Axiomas Finitos, Oraciones Infinitas: Una vez que conoces las partes, puedes entender nuevas combinaciones como 'Zul Gorm' aunque nunca hayas visto una piedra azul antes.")
        .with_takeaway("Satisfacción: El predicado 'Ruz' es satisfecho por todas las cosas rojas.")
        .with_observation(Observation::new(
            1,
            "El alienígena recoge una piedra gris áspera.",
            "🪨👽",
            "Gorm",
            "Eso es una piedra.",
        ))
        .with_observation(Observation::new(
            2,
            "El alienígena señala una piedra roja brillante en el suelo.",
            "🔴🪨",
            "Ruz Gorm",
            "Eso es una piedra roja.",
        ))
        .with_observation(Observation::new(
            3,
            "El alienígena señala al cielo azul claro.",
            "🟦☀️",
            "Zul Vell",
            "Eso es un cielo azul.",
        ))
        .with_observation(Observation::new(
            4,
            "El sol se pone, volviendo el cielo de un rojo profundo.",
            "🟥☀️",
            "Ruz Vell",
            "Eso es un cielo rojo.",
        ))
        .with_observation(Observation::new(
            5,
            "El alienígena encuentra una gema azul rara incrustada en una roca.",
            "💎🟦",
            "Zul Gorm",
            "Eso es una piedra azul.",
        ))
        .with_observation(Observation::new(
            6,
            "El alienígena sostiene una flor roja (distinta de piedra/cielo).",
            "🌹",
            "Ruz",
            "Eso es rojo.",
        ))
}

fn negation() -> Scenario {
    Scenario::new(Language::Spanish, "Umbrío")
        .with_alien_name("Sujeto Boole")
        .with_vocabulary(["Zan", "Korn", "Xo"])
        .with_keywords(
            "Zan",
            [
                "luz", "día", "sol", "brillante", "brilla", "iluminado", "claridad", "resplandor",
                "luminoso",
            ],
        )
        .with_keywords(
            "Korn",
            [
                "fuego", "llama", "quemar", "calor", "ardor", "incendio", "fogata", "caliente",
                "lumbre",
            ],
        )
        .with_keywords(
            "Xo",
            [
                "no", "negación", "falso", "ausencia", "sin", "nada", "tampoco", "falta",
                "carencia", "vacío",
            ],
        )
        .with_takeaway("Funciones de Verdad: 'Xo' es un operador lógico. Invierte el valor de verdad de la oración.")
        .with_takeaway("Objetos Abstractos: A diferencia de 'Conejo', no puedes señalar 'No'. Solo lo ves por la ausencia del objeto esperado.")
        .with_takeaway("Recursión: Los operadores lógicos nos permiten construir oraciones complejas a partir de simples.")
        .with_observation(Observation::new(
            1,
            "El sol brilla intensamente sobre la cabeza.",
            "☀️😎",
            "Zan",
            "Hay luz.",
        ))
        .with_observation(Observation::new(
            2,
            "Cae la noche. Está completamente oscuro.",
            "🌑👀",
            "Xo Zan",
            "No hay luz.",
        ))
        .with_observation(Observation::new(
            3,
            "El alienígena enciende una fogata.",
            "🔥🪵",
            "Korn",
            "Hay fuego.",
        ))
        .with_observation(Observation::new(
            4,
            "El alienígena vierte agua sobre el fuego. Se apaga, dejando ceniza húmeda.",
            "💧💨",
            "Xo Korn",
            "No hay fuego.",
        ))
        .with_observation(Observation::new(
            5,
            "El alienígena sostiene una antorcha en una cueva oscura.",
            "🔦🦇",
            "Korn",
            "Hay fuego (incluso aquí).",
        ))
        .with_observation(Observation::new(
            6,
            "El alienígena señala la boca oscura de la cueva (sin fuego, sin sol).",
            "🕳️",
            "Xo Zan",
            "No hay luz.",
        ))
}

fn quantification() -> Scenario {
    Scenario::new(Language::Spanish, "Gestalt")
        .with_alien_name("Sujeto Cantor")
        .with_vocabulary(["Hek", "Rond", "Sim", "Maka"])
        .with_keywords(
            "Hek",
            ["cubo", "caja", "cuadrado", "bloque", "ladrillo", "dado", "cuadrangular"],
        )
        .with_keywords(
            "Rond",
            [
                "esfera", "bola", "redondo", "orbe", "círculo", "pelota", "balón", "globular",
                "circular", "circulo", "globo",
            ],
        )
        .with_keywords(
            "Sim",
            ["uno", "un", "una", "existe", "singular", "individuo", "único", "solitario", "solo"],
        )
        .with_keywords(
            "Maka",
            [
                "todo", "todos", "muchos", "grupo", "múltiple", "universal", "montón", "varios",
                "totalidad", "entero", "multitud",
            ],
        )
        .with_takeaway("Cuantificación: Pasamos de hablar de objetos específicos a hablar de conjuntos de objetos.")
        .with_takeaway("Compromiso Ontológico (Trivia: Postura de Quine): Decir 'Sim Hek' (Hay un cubo) te compromete a la existencia de cubos. Davidson, sin embargo, se enfoca en las oraciones-T.")
        .with_takeaway("Forma Lógica: La gramática superficial puede ser simple, pero la forma lógica involucra variables que recorren un dominio.")
        .with_observation(Observation::new(
            1,
            "Un solo cubo está sobre la mesa.",
            "🟦",
            "Sim Hek",
            "Hay un cubo.",
        ))
        .with_observation(Observation::new(
            2,
            "Una sola esfera rueda por el suelo.",
            "⚽",
            "Sim Rond",
            "Hay una esfera.",
        ))
        .with_observation(Observation::new(
            3,
            "Una bandeja está llena de veinte cubos.",
            "🟦🟦🟦",
            "Maka Hek",
            "Hay muchos/todos los cubos.",
        ))
        .with_observation(Observation::new(
            4,
            "Un foso está lleno de cientos de esferas.",
            "⚽⚽⚽",
            "Maka Rond",
            "Hay muchas/todas las esferas.",
        ))
        .with_observation(Observation::new(
            5,
            "El alienígena sostiene un cubo, mientras señala la bandeja de muchos cubos.",
            "🟦👉🟦🟦",
            "Sim Hek",
            "Hay un cubo (Singular).",
        ))
        .with_observation(Observation::new(
            6,
            "El alienígena barre con su brazo toda la habitación de formas.",
            "🙌📦",
            "Maka",
            "Todo/Todos.",
        ))
}
