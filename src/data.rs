//! Built-in idiom, variation, explanation and dictionary tables
//!
//! Tables are plain static slices so their iteration order is the order
//! written here; the matcher's "first exact match wins" rule depends on it.

use crate::language::Language::{self, English, French, German, Hindi, Spanish};

/// (idiom phrase, [(target language, translation or explanation)])
pub(crate) type IdiomTable = &'static [(&'static str, &'static [(Language, &'static str)])];

pub(crate) const ENGLISH_IDIOMS: IdiomTable = &[
    (
        "break a leg",
        &[
            (English, "Good luck (a theatrical expression wishing performers good luck before a show)"),
            (Hindi, "शुभकामनाएं (अच्छे प्रदर्शन के लिए शुभकामना)"),
            (Spanish, "Buena suerte (expresión de desear buena suerte)"),
            (French, "Bonne chance (souhait de réussite)"),
            (German, "Hals- und Beinbruch (Wunsch für Erfolg)"),
        ],
    ),
    (
        "piece of cake",
        &[
            (English, "Very easy task (something that is extremely easy to do)"),
            (Hindi, "बहुत आसान काम (कोई काम जो बहुत आसान है)"),
            (Spanish, "Pan comido (algo muy fácil de hacer)"),
            (French, "C'est du gâteau (quelque chose de très facile)"),
            (German, "Ein Kinderspiel (etwas sehr einfaches)"),
        ],
    ),
    (
        "cost an arm and a leg",
        &[
            (English, "Very expensive (something that costs a lot of money)"),
            (Hindi, "बहुत महंगा होना (इतना महंगा कि आपको अपने अंग बेचने पड़ें)"),
            (Spanish, "Costar un ojo de la cara (ser muy caro)"),
            (French, "Coûter les yeux de la tête (être très cher)"),
            (German, "Ein Vermögen kosten (sehr teuer sein)"),
        ],
    ),
    (
        "hit the nail on the head",
        &[
            (English, "To be exactly right (to identify the exact point)"),
            (Hindi, "सही बात कहना (बिल्कुल सही बात कहना या करना)"),
            (Spanish, "Dar en el clavo (acertar completamente)"),
            (French, "Mettre dans le mille (être tout à fait exact)"),
            (German, "Den Nagel auf den Kopf treffen (genau richtig liegen)"),
        ],
    ),
    (
        "once in a blue moon",
        &[
            (English, "Very rarely (something that happens extremely infrequently)"),
            (Hindi, "कभी-कभार (बहुत कम होने वाली घटना)"),
            (Spanish, "De higos a brevas (algo que ocurre muy raramente)"),
            (French, "Une fois n'est pas coutume (quelque chose de très rare)"),
            (German, "Alle Jubeljahre (sehr selten)"),
        ],
    ),
    (
        "a penny for your thoughts",
        &[
            (English, "Tell me what you're thinking (an expression used to ask what someone is thinking about)"),
            (Hindi, "आप क्या सोच रहे हैं? (किसी के विचारों के बारे में पूछना)"),
            (Spanish, "¿En qué piensas? (preguntar por los pensamientos de alguien)"),
            (French, "Un sou pour tes pensées (demander à quelqu'un à quoi il pense)"),
            (German, "Was geht dir durch den Kopf? (nach jemandes Gedanken fragen)"),
        ],
    ),
    (
        "beat around the bush",
        &[
            (English, "Avoid talking about what's important (to discuss a matter without getting to the point)"),
            (Hindi, "बात को घुमाना-फिराना (मुख्य विषय से बचना)"),
            (Spanish, "Andarse por las ramas (evitar el tema principal)"),
            (French, "Tourner autour du pot (éviter le sujet principal)"),
            (German, "Um den heißen Brei herumreden (das Hauptthema vermeiden)"),
        ],
    ),
    (
        "it's raining cats and dogs",
        &[
            (English, "It's raining very heavily (a heavy downpour)"),
            (Hindi, "मूसलाधार बारिश हो रही है (बहुत तेज़ बारिश)"),
            (Spanish, "Está lloviendo a cántaros (lluvia muy intensa)"),
            (French, "Il pleut des cordes (pluie très forte)"),
            (German, "Es gießt wie aus Eimern (sehr starker Regen)"),
        ],
    ),
    (
        "it is raining cats and dogs",
        &[
            (English, "It's raining very heavily (a heavy downpour)"),
            (Hindi, "मूसलाधार बारिश हो रही है (बहुत तेज़ बारिश)"),
            (Spanish, "Está lloviendo a cántaros (lluvia muy intensa)"),
            (French, "Il pleut des cordes (pluie très forte)"),
            (German, "Es gießt wie aus Eimern (sehr starker Regen)"),
        ],
    ),
    (
        "kill two birds with one stone",
        &[
            (English, "Accomplish two things with a single action (achieve two goals with one effort)"),
            (Hindi, "एक तीर से दो निशाने (एक कार्रवाई से दो उद्देश्य पूरे करना)"),
            (Spanish, "Matar dos pájaros de un tiro (lograr dos objetivos con una sola acción)"),
            (French, "Faire d'une pierre deux coups (atteindre deux objectifs avec une seule action)"),
            (German, "Zwei Fliegen mit einer Klappe schlagen (zwei Ziele mit einer Handlung erreichen)"),
        ],
    ),
    (
        "the ball is in your court",
        &[
            (English, "It's your turn to make a decision or take action (the responsibility is now yours)"),
            (Hindi, "अब आपकी बारी है (अब फैसला या कार्रवाई आपके हाथ में है)"),
            (Spanish, "La pelota está en tu tejado (es tu turno de decidir o actuar)"),
            (French, "La balle est dans ton camp (c'est à toi de décider ou d'agir)"),
            (German, "Der Ball liegt bei dir (es liegt an dir, zu entscheiden oder zu handeln)"),
        ],
    ),
    (
        "barking up the wrong tree",
        &[
            (English, "Looking in the wrong place or accusing the wrong person (pursuing a mistaken line of thought or action)"),
            (Hindi, "गलत जगह खोजना (किसी गलत व्यक्ति पर शक करना या गलत दिशा में जांच करना)"),
            (Spanish, "Estar equivocado (buscar en el lugar incorrecto)"),
            (French, "Faire fausse route (se tromper de direction)"),
            (German, "Auf dem Holzweg sein (in die falsche Richtung gehen)"),
        ],
    ),
    (
        "bite off more than you can chew",
        &[
            (English, "Take on more responsibility than you can handle (attempt something too ambitious)"),
            (Hindi, "अपनी क्षमता से अधिक काम लेना (अपनी क्षमता से अधिक जिम्मेदारी लेना)"),
            (Spanish, "Abarcar más de lo que se puede apretar (intentar algo demasiado ambicioso)"),
            (French, "Voir trop grand (entreprendre plus que ce qu'on peut accomplir)"),
            (German, "Sich zu viel vornehmen (mehr Verantwortung übernehmen als man bewältigen kann)"),
        ],
    ),
];

pub(crate) const HINDI_IDIOMS: IdiomTable = &[
    (
        "आँखों का तारा",
        &[
            (English, "Apple of one's eye (someone very precious)"),
            (Hindi, "बहुत प्रिय व्यक्ति (कोई ऐसा व्यक्ति जो बहुत प्यारा है)"),
            (Spanish, "La niña de los ojos (persona muy preciada)"),
            (French, "La prunelle de ses yeux (quelqu'un de très précieux)"),
            (German, "Sein Augapfel (jemand, der sehr geschätzt wird)"),
        ],
    ),
    (
        "नाक में दम करना",
        &[
            (English, "To be a pain in the neck (to annoy someone constantly)"),
            (Hindi, "बहुत परेशान करना (किसी को लगातार तंग करना)"),
            (Spanish, "Ser un dolor de cabeza (molestar constantemente)"),
            (French, "Casser les pieds (embêter constamment)"),
            (German, "Auf die Nerven gehen (jemanden ständig nerven)"),
        ],
    ),
    (
        "चार चाँद लगाना",
        &[
            (English, "To add icing on the cake (to make something even better)"),
            (Hindi, "शोभा बढ़ाना (किसी चीज़ को और भी बेहतर बनाना)"),
            (Spanish, "Ser la guinda del pastel (hacer algo aún mejor)"),
            (French, "Être la cerise sur le gâteau (rendre quelque chose encore meilleur)"),
            (German, "Das i-Tüpfelchen sein (etwas noch besser machen)"),
        ],
    ),
    (
        "हाथ तंग होना",
        &[
            (English, "To be short of money (to be in financial difficulty)"),
            (Hindi, "आर्थिक तंगी होना (वित्तीय कठिनाई में होना)"),
            (Spanish, "Estar en apuros económicos (tener dificultades financieras)"),
            (French, "Être à court d'argent (avoir des difficultés financières)"),
            (German, "Knapp bei Kasse sein (in finanziellen Schwierigkeiten sein)"),
        ],
    ),
    (
        "अपना उल्लू सीधा करना",
        &[
            (English, "To serve one's own interest (to act in self-interest)"),
            (Hindi, "अपना स्वार्थ साधना (स्वयं के हित में कार्य करना)"),
            (Spanish, "Mirar por sus propios intereses (actuar por interés propio)"),
            (French, "Tirer la couverture à soi (agir dans son propre intérêt)"),
            (German, "Seinen eigenen Vorteil suchen (im Eigeninteresse handeln)"),
        ],
    ),
];

pub(crate) const SPANISH_IDIOMS: IdiomTable = &[(
    "estar en las nubes",
    &[
        (English, "To have your head in the clouds (to be distracted or not paying attention)"),
        (Spanish, "Estar distraído o no prestar atención (estar pensando en otra cosa)"),
        (Hindi, "ख्यालों में खोए होना (ध्यान नहीं देना)"),
        (French, "Être dans les nuages (être distrait ou ne pas faire attention)"),
        (German, "Mit dem Kopf in den Wolken sein (abgelenkt sein oder nicht aufpassen)"),
    ],
)];

pub(crate) const FRENCH_IDIOMS: IdiomTable = &[(
    "avoir un poil dans la main",
    &[
        (English, "To be very lazy (literally: to have a hair in the hand)"),
        (French, "Être très paresseux (ne pas aimer travailler)"),
        (Hindi, "बहुत आलसी होना"),
        (Spanish, "Ser muy perezoso"),
        (German, "Sehr faul sein"),
    ],
)];

/// Curated alternate phrasings, already in normalized form, keyed by the
/// canonical idiom they map back to.
pub(crate) const ENGLISH_VARIATIONS: &[(&str, &[&str])] = &[
    (
        "it's raining cats and dogs",
        &[
            "its raining cats and dogs",
            "it is raining cats and dogs",
            "raining cats and dogs",
            "raining like cats and dogs",
        ],
    ),
    (
        "piece of cake",
        &[
            "thats a piece of cake",
            "that is a piece of cake",
            "its a piece of cake",
            "this is a piece of cake",
            "easy as a piece of cake",
        ],
    ),
    (
        "cost an arm and a leg",
        &[
            "costs an arm and a leg",
            "costing an arm and a leg",
            "that costs an arm and a leg",
            "will cost an arm and a leg",
            "it costs an arm and a leg",
        ],
    ),
    (
        "beat around the bush",
        &[
            "beating around the bush",
            "beats around the bush",
            "dont beat around the bush",
            "stop beating around the bush",
        ],
    ),
    (
        "break a leg",
        &[
            "breaking a leg",
            "breaks a leg",
            "i hope you break a leg",
            "break a leg out there",
        ],
    ),
    (
        "hit the nail on the head",
        &[
            "hits the nail on the head",
            "hitting the nail on the head",
            "you hit the nail on the head",
            "that hits the nail on the head",
        ],
    ),
    (
        "barking up the wrong tree",
        &[
            "barks up the wrong tree",
            "youre barking up the wrong tree",
            "you are barking up the wrong tree",
            "i think youre barking up the wrong tree",
        ],
    ),
    (
        "the ball is in your court",
        &[
            "balls in your court",
            "the balls in your court",
            "the ball is now in your court",
        ],
    ),
    (
        "kill two birds with one stone",
        &[
            "killing two birds with one stone",
            "kills two birds with one stone",
            "trying to kill two birds with one stone",
            "like killing two birds with one stone",
        ],
    ),
    (
        "once in a blue moon",
        &[
            "only once in a blue moon",
            "happens once in a blue moon",
            "its once in a blue moon",
            "it is once in a blue moon",
        ],
    ),
];

/// Everyday idioms offered in same-language explanation mode, with their
/// plain-language meaning.
pub(crate) const ENGLISH_COMMON_IDIOMS: &[(&str, &str)] = &[
    ("under the weather", "Feeling ill or unwell"),
    ("spill the beans", "To reveal a secret"),
    ("let the cat out of the bag", "To reveal a secret by accident"),
    ("bite the bullet", "To face a difficult or unpleasant situation with courage"),
    ("hit the sack", "To go to bed"),
    ("call it a day", "To stop working for the rest of the day"),
    ("cut corners", "To do something badly or cheaply to save time or money"),
    ("the last straw", "The final problem in a series that makes a situation unbearable"),
    ("on thin ice", "In a risky or precarious situation"),
    ("costs an arm and a leg", "Very expensive (something that costs a lot of money)"),
    ("a blessing in disguise", "Something that seems bad at first but turns out to be good"),
    ("break the ice", "To make people feel more comfortable in a social situation"),
    ("when pigs fly", "Something that will never happen"),
];

pub(crate) const SPANISH_COMMON_IDIOMS: &[(&str, &str)] = &[
    ("tomar el pelo", "Burlarse de alguien o engañarle en broma"),
    ("costar un ojo de la cara", "Ser muy caro"),
    ("no tener pelos en la lengua", "Hablar con franqueza, sin rodeos"),
];

pub(crate) const FRENCH_COMMON_IDIOMS: &[(&str, &str)] = &[
    ("coûter les yeux de la tête", "Être très cher"),
    ("poser un lapin", "Ne pas venir à un rendez-vous"),
    ("avoir le cafard", "Être triste, déprimé"),
];

/// (phrase, translation) pairs for one direction of the offline dictionary
pub(crate) type DictionaryTable = &'static [(&'static str, &'static str)];

pub(crate) const ENGLISH_TO_HINDI: DictionaryTable = &[
    ("hello", "नमस्ते"),
    ("thank you", "धन्यवाद"),
    ("yes", "हां"),
    ("no", "नहीं"),
    ("please", "कृपया"),
    ("sorry", "माफ़ करें"),
    ("good morning", "सुप्रभात"),
    ("good night", "शुभ रात्रि"),
    ("how are you", "आप कैसे हैं?"),
    ("my name is", "मेरा नाम है"),
    ("what is your name", "आपका नाम क्या है?"),
    ("i love you", "मैं तुमसे प्यार करता हूँ / मैं तुमसे प्यार करती हूँ"),
    ("excuse me", "क्षमा करें"),
    ("welcome", "स्वागत है"),
    ("goodbye", "अलविदा"),
    ("water", "पानी"),
    ("food", "भोजन"),
    ("break a leg", "शुभकामनाएं"),
    ("piece of cake", "बहुत आसान काम"),
    ("cost an arm and a leg", "बहुत महंगा होना"),
    ("once in a blue moon", "कभी-कभार"),
];

pub(crate) const HINDI_TO_ENGLISH: DictionaryTable = &[
    ("नमस्ते", "Hello"),
    ("धन्यवाद", "Thank you"),
    ("हां", "Yes"),
    ("नहीं", "No"),
    ("कृपया", "Please"),
    ("माफ़ करें", "Sorry"),
    ("सुप्रभात", "Good morning"),
    ("शुभ रात्रि", "Good night"),
    ("आप कैसे हैं?", "How are you?"),
    ("मेरा नाम है", "My name is"),
    ("आपका नाम क्या है?", "What is your name?"),
    ("मैं तुमसे प्यार करता हूँ", "I love you (said by male)"),
    ("मैं तुमसे प्यार करती हूँ", "I love you (said by female)"),
    ("क्षमा करें", "Excuse me"),
    ("स्वागत है", "Welcome"),
    ("अलविदा", "Goodbye"),
    ("पानी", "Water"),
    ("भोजन", "Food"),
    ("शुभकामनाएं", "Good luck / Break a leg"),
    ("बहुत आसान काम", "Very easy task / Piece of cake"),
    ("बहुत महंगा होना", "To be very expensive / Cost an arm and a leg"),
];
