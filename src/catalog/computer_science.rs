//! Computer Science branch: subjects, sample doubts and rule tables.
//!
//! Rule order within each subject is significant. Several trigger sets
//! overlap (for example "merge" in two Algorithms rules); the earlier rule
//! always wins.

use super::{Branch, Content, Rule, Subject, GENERIC_SUMMARY};

pub(super) const BRANCH: Branch = Branch {
    name: "Computer Science",
    subjects: &[
        DATA_STRUCTURES,
        OPERATING_SYSTEMS,
        ALGORITHMS,
        COMPUTER_NETWORKS,
        DATABASE_MANAGEMENT_SYSTEMS,
        WEB_DEVELOPMENT,
        ARTIFICIAL_INTELLIGENCE,
        SOFTWARE_ENGINEERING,
        COMPILER_DESIGN,
        DISCRETE_MATHEMATICS,
    ],
};

// =============================================================================
// Data Structures
// =============================================================================

const DATA_STRUCTURES: Subject = Subject {
    name: "Data Structures",
    definition: "Data Structures are organized ways to store and manage data so algorithms can access and modify it efficiently.",
    samples: &[
        "How does a binary search tree work?",
        "When should I use a hash table vs array?",
        "Explain tree traversal methods",
        "What is the difference between stack and queue?",
        "How does a linked list work?",
        "What are heaps and priority queues?",
    ],
    rules: &[
        Rule {
            triggers: &["tree", "binary", "bst", "trie"],
            content: Content {
                examples: &[
                    "Routing tables in networks often use tree-like structures for prefix matching.",
                    "File system directories are represented as trees for hierarchical organization.",
                ],
                industry: "Search engines, databases, and compilers use tree structures for parsing, indexing, and fast lookups.",
                keywords: &["tree", "node", "root", "leaf", "traversal"],
                summary: "Trees organize hierarchical data; traverse and balance them for performance.",
            },
        },
        Rule {
            triggers: &["hash", "hash table", "hash map"],
            content: Content {
                examples: &[
                    "Caching DNS lookups using hash tables for O(1) average retrieval.",
                    "Python dictionaries internally use hash tables for fast lookups.",
                ],
                industry: "Databases, caching layers, and indexing engines rely heavily on hash tables.",
                keywords: &["hash function", "collision", "load factor", "hash table", "dictionary"],
                summary: "Hash tables provide fast average-case lookups; handle collisions carefully.",
            },
        },
        Rule {
            triggers: &["graph", "dfs", "bfs", "shortest"],
            content: Content {
                examples: &[
                    "Road and traffic networks model intersections as graph nodes and roads as edges.",
                    "Social networks model users and their relationships using graphs.",
                ],
                industry: "Transportation planning, recommendation systems, and network analysis rely on graphs.",
                keywords: &["graph", "vertex", "edge", "path", "connectivity"],
                summary: "Graphs model pairwise relationships; use traversals and algorithms to extract insights.",
            },
        },
        Rule {
            triggers: &["stack", "queue", "difference"],
            content: Content {
                examples: &[
                    "Browser back button uses a stack to track visited pages.",
                    "CPU scheduling uses queues to manage ready processes.",
                ],
                industry: "Operating systems and memory management heavily use stacks and queues.",
                keywords: &["LIFO", "FIFO", "push", "pop", "enqueue", "dequeue"],
                summary: "Stack is LIFO; queue is FIFO. Choose based on needed access pattern.",
            },
        },
        Rule {
            triggers: &["linked", "link", "pointer"],
            content: Content {
                examples: &[
                    "Undo/redo functionality in editors uses doubly linked lists.",
                    "LRU cache eviction uses doubly linked lists for efficient memory management.",
                ],
                industry: "Memory management and dynamic data manipulation use linked lists extensively.",
                keywords: &["node", "pointer", "singly linked", "doubly linked", "circular"],
                summary: "Linked lists excel at insertion/deletion; arrays at random access trade-offs exist.",
            },
        },
        Rule {
            triggers: &["heap", "priority"],
            content: Content {
                examples: &[
                    "Priority queues in OS schedulers use heaps to select next process.",
                    "Dijkstra's algorithm uses min-heaps to find shortest paths efficiently.",
                ],
                industry: "Real-time systems and game engines use heaps for efficient priority management.",
                keywords: &["heap", "priority queue", "min-heap", "max-heap", "heapify"],
                summary: "Heaps maintain priority efficiently; use for top-k queries and scheduling.",
            },
        },
    ],
    fallback: Content {
        examples: &[
            "Using arrays to store sensor readings in embedded systems.",
            "Hash tables powering fast lookups in caches and key-value stores.",
        ],
        industry: "Databases, caching, and system internals depend on efficient data structures.",
        keywords: &["array", "list", "stack", "queue", "hash table"],
        summary: GENERIC_SUMMARY,
    },
};

// =============================================================================
// Operating Systems
// =============================================================================

const OPERATING_SYSTEMS: Subject = Subject {
    name: "Operating Systems",
    definition: "An Operating System (OS) manages hardware and software resources, providing services to programs and users.",
    samples: &[
        "What is context switching?",
        "How do semaphores prevent race conditions?",
        "Explain virtual memory briefly",
        "What is a process vs thread?",
        "How does page replacement work?",
        "What is inter-process communication?",
    ],
    rules: &[
        Rule {
            triggers: &["process", "context", "scheduling"],
            content: Content {
                examples: &[
                    "A scheduler deciding which program gets CPU time on a multicore system.",
                    "Process isolation that prevents one program from corrupting another's memory.",
                ],
                industry: "Cloud providers and OS vendors optimize scheduling for fairness and throughput.",
                keywords: &["process", "thread", "scheduling", "context switch"],
                summary: "OS components like schedulers and memory managers ensure programs run efficiently and safely.",
            },
        },
        Rule {
            triggers: &["thread", "process vs", "difference"],
            content: Content {
                examples: &[
                    "Web server uses multiple threads to handle concurrent client requests.",
                    "Python's multiprocessing uses separate processes to bypass the Global Interpreter Lock.",
                ],
                industry: "Concurrent applications choose threads or processes based on performance and isolation needs.",
                keywords: &["thread", "process", "lightweight", "shared memory", "concurrency"],
                summary: "Threads share memory and are lightweight; processes are isolated and heavyweight.",
            },
        },
        Rule {
            triggers: &["page", "replacement", "virtual"],
            content: Content {
                examples: &[
                    "LRU page replacement evicts least-recently-used pages to manage memory.",
                    "OS swaps pages to disk when physical memory fills up.",
                ],
                industry: "Memory management is critical for OS efficiency, especially on embedded systems.",
                keywords: &["page replacement", "virtual memory", "paging", "TLB", "page fault"],
                summary: "Paging enables abstract memory; replacement policies balance speed and space.",
            },
        },
        Rule {
            triggers: &["ipc", "inter-process", "communication"],
            content: Content {
                examples: &[
                    "Pipes in Unix shells pass data between processes.",
                    "Message queues in microservices decouple service communication.",
                ],
                industry: "Distributed systems and microservices rely on robust inter-process communication.",
                keywords: &["IPC", "pipes", "sockets", "message queues", "shared memory"],
                summary: "IPC methods trade-off latency, simplicity, and flexibility based on needs.",
            },
        },
        Rule {
            triggers: &["deadlock", "mutex", "semaphore"],
            content: Content {
                examples: &[
                    "Two processes waiting on each other for locks (classic deadlock).",
                    "Using semaphores to coordinate access to a limited pool of resources.",
                ],
                industry: "Real-time systems and databases handle synchronization carefully to avoid deadlocks.",
                keywords: &["deadlock", "resource allocation", "locking", "synchronization"],
                summary: "Avoid circular waits, use ordering or timeouts, and design for safe concurrent access.",
            },
        },
    ],
    fallback: Content {
        examples: &[
            "Virtual memory enabling programs to use more memory than physically available.",
            "Device drivers letting OS interact with printers and network cards.",
        ],
        industry: "System software, embedded devices, and cloud platforms rely on core OS services.",
        keywords: &["virtual memory", "paging", "drivers", "kernel"],
        summary: GENERIC_SUMMARY,
    },
};

// =============================================================================
// Algorithms
// =============================================================================

const ALGORITHMS: Subject = Subject {
    name: "Algorithms",
    definition: "Algorithms are step-by-step procedures to solve computational problems with measurable resources.",
    samples: &[
        "What's the difference between merge sort and quick sort?",
        "Explain dynamic programming with an example",
        "When to use greedy algorithms?",
        "What is binary search and how is it different from linear search?",
        "Explain the divide and conquer approach",
        "What is backtracking with examples?",
    ],
    rules: &[
        Rule {
            triggers: &["sort", "merge", "quick", "complexity"],
            content: Content {
                examples: &[
                    "Sorting large datasets for database indexing.",
                    "Choosing the right sort for memory-limited devices.",
                ],
                industry: "Search engines, data processing, and performance-critical software rely on algorithmic choices.",
                keywords: &["time complexity", "space complexity", "divide and conquer", "greedy"],
                summary: "Pick algorithms by correctness and complexity; test on realistic inputs.",
            },
        },
        Rule {
            triggers: &["dynamic", "dp", "memo"],
            content: Content {
                examples: &[
                    "Sequence alignment in bioinformatics using dynamic programming.",
                    "Optimizing resource allocation in software using memoization.",
                ],
                industry: "Optimization tasks in finance, logistics, and machine systems often use DP techniques.",
                keywords: &["dynamic programming", "overlapping subproblems", "optimal substructure"],
                summary: "Dynamic programming transforms exponential solutions into efficient ones by reusing results.",
            },
        },
        Rule {
            triggers: &["binary", "search", "linear"],
            content: Content {
                examples: &[
                    "Finding a contact in a sorted phone book using binary search.",
                    "Server load balancing selecting best resource using binary search.",
                    "Linear search through a to-do list to find an item.",
                ],
                industry: "Database indexes and search engines rely on binary search for fast lookups.",
                keywords: &["binary search", "O(log n)", "sorted", "divide and conquer"],
                summary: "Binary search is exponentially faster than linear on sorted data.",
            },
        },
        Rule {
            triggers: &["divide", "conquer", "merge", "recursive"],
            content: Content {
                examples: &[
                    "Merge sort divides arrays, conquers each half, then merges results.",
                    "File system traversal recursively explores directory trees.",
                ],
                industry: "Parallel processing, big data, and system algorithms use divide-and-conquer.",
                keywords: &["divide and conquer", "recursion", "subproblem", "combine"],
                summary: "Divide-and-conquer breaks hard problems into simpler identical subproblems.",
            },
        },
        Rule {
            triggers: &["backtrack", "explore", "constraint", "pruning"],
            content: Content {
                examples: &[
                    "N-Queens problem explores placements and backtracks on conflicts.",
                    "Sudoku solvers try number placements and undo invalid ones.",
                ],
                industry: "Constraint solvers, game AI, and combinatorial optimization use backtracking.",
                keywords: &["backtracking", "constraint satisfaction", "pruning", "search tree"],
                summary: "Backtracking systematically explores choices and undoes failed attempts.",
            },
        },
    ],
    fallback: Content {
        examples: &[
            "Greedy algorithms selecting locally best options for global problems.",
            "Graph algorithms finding connected components or shortest paths.",
        ],
        industry: "Every software system relies on choosing the right algorithm for the task.",
        keywords: &["algorithm", "optimization", "efficiency", "correctness"],
        summary: GENERIC_SUMMARY,
    },
};

// =============================================================================
// Computer Networks
// =============================================================================

const COMPUTER_NETWORKS: Subject = Subject {
    name: "Computer Networks",
    definition: "Computer Networks enable systems to exchange data using protocols, addressing, and routing.",
    samples: &[
        "What is the difference between TCP and UDP?",
        "How does routing work at a high level?",
        "What does HTTP do?",
        "Explain the OSI model layers",
        "What is IP and how does IP addressing work?",
        "What is DNS and how does it work?",
    ],
    rules: &[
        Rule {
            triggers: &["tcp", "udp", "http"],
            content: Content {
                examples: &[
                    "Streaming video uses UDP for low-latency delivery.",
                    "Web browsing relies on TCP and HTTP for reliable transfers.",
                ],
                industry: "Cloud services, telecom, and distributed systems depend on robust networking.",
                keywords: &["protocol", "packet", "router", "latency", "throughput"],
                summary: "Protocols and layering abstract network complexity and ensure reliable communication.",
            },
        },
        Rule {
            triggers: &["osi", "layer", "model", "architecture"],
            content: Content {
                examples: &[
                    "HTTP operates at Layer 7; IP at Layer 3; Ethernet at Layer 2.",
                    "Firewalls inspect packets at different OSI layers for security.",
                ],
                industry: "Network engineers use the OSI model to troubleshoot and design systems.",
                keywords: &["OSI model", "seven layers", "physical", "network", "application"],
                summary: "OSI model abstracts networking into 7 layers; each has protocols and functions.",
            },
        },
        Rule {
            triggers: &["dns", "domain", "name resolution", "lookup"],
            content: Content {
                examples: &[
                    "Typing google.com triggers DNS to resolve it to an IP address.",
                    "DNS caching at ISPs speeds up repeated lookups.",
                ],
                industry: "DNS is critical infrastructure; performance and security are paramount.",
                keywords: &["DNS", "domain name", "resolution", "record", "nameserver"],
                summary: "DNS translates human-readable names to IP addresses via hierarchical lookup.",
            },
        },
        Rule {
            triggers: &["ip", "address", "ipv4", "ipv6", "routing"],
            content: Content {
                examples: &[
                    "IP routing tables guide packets to correct networks.",
                    "IPv6 addresses provide far more address space than IPv4.",
                ],
                industry: "ISPs and data centers carefully manage IP allocation and routing.",
                keywords: &["IP address", "routing", "subnet", "gateway", "CIDR"],
                summary: "IP addresses identify devices; routing tables guide traffic to destinations.",
            },
        },
    ],
    fallback: Content {
        examples: &[
            "Network protocols standardizing communication between devices.",
            "Routers and switches forwarding data based on addresses.",
        ],
        industry: "Networking is the backbone of the digital world.",
        keywords: &["network", "communication", "protocol", "routing"],
        summary: GENERIC_SUMMARY,
    },
};

// =============================================================================
// Database Management Systems
// =============================================================================

const DATABASE_MANAGEMENT_SYSTEMS: Subject = Subject {
    name: "Database Management Systems",
    definition: "Database Management Systems (DBMS) are software tools for storing, managing, and querying data efficiently.",
    samples: &[
        "What are ACID properties and why are they important?",
        "Explain normalization and its forms",
        "What is the difference between SQL and NoSQL?",
        "What is a primary key and foreign key?",
        "Explain joins in database queries",
        "What is indexing and why is it important?",
    ],
    rules: &[
        Rule {
            triggers: &["acid", "acid properties"],
            content: Content {
                examples: &[
                    "Banking systems use ACID to ensure money transfers are reliable.",
                    "E-commerce platforms apply ACID to handle concurrent orders safely.",
                ],
                industry: "Financial institutions and mission-critical systems rely on ACID compliance.",
                keywords: &["atomicity", "consistency", "isolation", "durability"],
                summary: "ACID ensures reliable transactions; each part is crucial for data integrity.",
            },
        },
        Rule {
            triggers: &["normalization", "normal form", "1nf", "2nf", "3nf"],
            content: Content {
                examples: &[
                    "Organizing student data into separate tables for courses and records.",
                    "Designing a library database without data redundancy.",
                ],
                industry: "Database designers use normalization to minimize storage and improve query efficiency.",
                keywords: &["normalization", "decomposition", "functional dependency", "normal forms"],
                summary: "Normalization eliminates redundancy and improves data quality.",
            },
        },
        Rule {
            triggers: &["primary", "key", "unique", "constraint"],
            content: Content {
                examples: &[
                    "Student ID is a primary key uniquely identifying each student record.",
                    "Email addresses are often unique constraints in user tables.",
                ],
                industry: "Database schemas use primary keys to enforce data integrity and enable fast lookups.",
                keywords: &["primary key", "foreign key", "unique constraint", "data integrity"],
                summary: "Primary keys uniquely identify records; foreign keys link related tables.",
            },
        },
        Rule {
            triggers: &["join", "inner", "left", "right", "outer"],
            content: Content {
                examples: &[
                    "Joining students and courses tables to find which courses each student takes.",
                    "LEFT JOIN to list all students and their enrollments if any.",
                ],
                industry: "Complex queries in data analysis and reporting heavily rely on joins.",
                keywords: &["join", "inner join", "left join", "right join", "cross product"],
                summary: "Joins combine data from multiple tables based on relationships.",
            },
        },
        Rule {
            triggers: &["index", "indexing", "performance", "search"],
            content: Content {
                examples: &[
                    "B-tree indexes on student IDs speed up lookups from seconds to milliseconds.",
                    "Full-text indexes enable fast searching in large document collections.",
                ],
                industry: "Indexes are crucial for database performance; they must be carefully chosen.",
                keywords: &["index", "B-tree", "search", "query optimization", "trade-off"],
                summary: "Indexes speed up retrieval at the cost of slower insertions and updates.",
            },
        },
        Rule {
            triggers: &["sql", "nosql"],
            content: Content {
                examples: &[
                    "SQL for structured data like financial records; NoSQL for flexible documents.",
                    "Choosing MongoDB for rapid development vs PostgreSQL for strict schemas.",
                ],
                industry: "Startups prefer NoSQL flexibility; enterprises often use SQL for consistency.",
                keywords: &["relational", "document", "scalability", "schema"],
                summary: "SQL excels at structured data; NoSQL at scalability and flexibility.",
            },
        },
    ],
    fallback: Content {
        examples: &[
            "Designing schemas to minimize redundancy and extraction.",
            "Querying databases to extract insights from large datasets.",
        ],
        industry: "Every application that stores data relies on a well-designed database.",
        keywords: &["database", "schema", "query", "efficiency"],
        summary: GENERIC_SUMMARY,
    },
};

// =============================================================================
// Web Development
// =============================================================================

const WEB_DEVELOPMENT: Subject = Subject {
    name: "Web Development",
    definition: "Web Development involves building applications that run in browsers and web servers using HTML, CSS, JavaScript, and backend frameworks.",
    samples: &[
        "What is the difference between frontend and backend?",
        "Explain REST API principles",
        "How does HTTP request-response work?",
        "What are cookies and sessions?",
        "Explain MVC architecture",
        "What is CORS and why is it important?",
    ],
    rules: &[
        Rule {
            triggers: &["frontend", "backend"],
            content: Content {
                examples: &[
                    "Frontend handles UI and user interactions; backend processes and stores data.",
                    "React for frontend, Node.js for backend in a full-stack application.",
                ],
                industry: "Web applications power e-commerce, social media, and SaaS platforms.",
                keywords: &["frontend", "backend", "client-server", "full-stack"],
                summary: "Frontend is what users see; backend is the logic that powers it.",
            },
        },
        Rule {
            triggers: &["rest", "api", "restful"],
            content: Content {
                examples: &[
                    "Twitter API exposes endpoints for tweets, users, and timelines.",
                    "Google Maps API provides location services to third-party apps.",
                ],
                industry: "RESTful APIs connect mobile apps, web services, and IoT devices.",
                keywords: &["REST", "endpoints", "HTTP methods", "stateless"],
                summary: "REST is a standard way to build APIs using HTTP methods.",
            },
        },
        Rule {
            triggers: &["cookie", "session", "stateful"],
            content: Content {
                examples: &[
                    "Shopping cart items persist via session cookies until checkout.",
                    "Login tokens stored in cookies enable persistent authentication.",
                ],
                industry: "E-commerce and SaaS rely on cookies/sessions to manage user state.",
                keywords: &["cookies", "sessions", "authentication", "tokens"],
                summary: "Cookies store client data; sessions store server-side user state.",
            },
        },
        Rule {
            triggers: &["mvc", "mvvm", "architecture", "pattern"],
            content: Content {
                examples: &[
                    "Model stores data, View displays it, Controller handles user input.",
                    "MVVM separates UI logic from business logic for testability.",
                ],
                industry: "MVC architecture structures large web applications for maintainability.",
                keywords: &["MVC", "Model", "View", "Controller", "separation of concerns"],
                summary: "MVC separates concerns: data, presentation, and logic.",
            },
        },
        Rule {
            triggers: &["cors", "cross-origin", "same-origin"],
            content: Content {
                examples: &[
                    "Frontend on domain A accessing API on domain B requires CORS headers.",
                    "Browsers enforce same-origin policy for security unless CORS allows it.",
                ],
                industry: "Modern web requires CORS for secure cross-domain communication.",
                keywords: &["CORS", "cross-origin", "same-origin policy", "headers"],
                summary: "CORS allows controlled access to resources from different origins.",
            },
        },
        Rule {
            triggers: &["request", "response", "http"],
            content: Content {
                examples: &[
                    "A browser sends a GET request to fetch a web page.",
                    "A form submission sends a POST request with user data to the server.",
                ],
                industry: "HTTP is the foundation of web communication.",
                keywords: &["HTTP", "request", "response", "status codes"],
                summary: "HTTP request-response cycle enables all web transactions.",
            },
        },
    ],
    fallback: Content {
        examples: &[
            "Building interactive user interfaces that respond to user input.",
            "Creating scalable backend services that serve millions of users.",
        ],
        industry: "Web development powers the modern internet and digital transformation.",
        keywords: &["web", "browser", "server", "ui", "database"],
        summary: GENERIC_SUMMARY,
    },
};

// =============================================================================
// Artificial Intelligence
// =============================================================================

const ARTIFICIAL_INTELLIGENCE: Subject = Subject {
    name: "Artificial Intelligence",
    definition: "Artificial Intelligence (AI) is the field of creating intelligent machines that can learn, reason, and make decisions.",
    samples: &[
        "What is machine learning and its types?",
        "Explain supervised vs unsupervised learning",
        "What is neural network and deep learning?",
        "What is overfitting and underfitting?",
        "Explain cluster analysis in machine learning",
        "What are activation functions in neural networks?",
    ],
    rules: &[
        Rule {
            triggers: &["machine learning", "ml"],
            content: Content {
                examples: &[
                    "Spam detection in email learns from labeled spam and legitimate emails.",
                    "Movie recommendations learn user preferences from viewing history.",
                ],
                industry: "ML powers fraud detection, recommendation systems, and predictive analytics.",
                keywords: &["supervised", "unsupervised", "training", "model"],
                summary: "Machine learning enables systems to improve without explicit programming.",
            },
        },
        Rule {
            triggers: &["supervised", "unsupervised"],
            content: Content {
                examples: &[
                    "Supervised: predicting house prices from historical sales data.",
                    "Unsupervised: clustering customers by shopping behavior patterns.",
                ],
                industry: "Supervised learning dominates engineering; unsupervised helps discover patterns.",
                keywords: &["labeled data", "clustering", "classification", "regression"],
                summary: "Supervised learning uses labels; unsupervised discovers hidden patterns.",
            },
        },
        Rule {
            triggers: &["overfitting", "underfitting", "generalization"],
            content: Content {
                examples: &[
                    "Model scoring 99% on training data but only 60% on test data (overfitting).",
                    "Model too simple, scoring 70% on both training and test data (underfitting).",
                ],
                industry: "Managing overfitting/underfitting is crucial for production ML systems.",
                keywords: &["overfitting", "underfitting", "regularization", "cross-validation"],
                summary: "Balance model complexity: too simple (underfitting), too complex (overfitting).",
            },
        },
        Rule {
            triggers: &["cluster", "clustering", "k-means"],
            content: Content {
                examples: &[
                    "Customer segmentation clustering groups similar shoppers for targeted marketing.",
                    "Document clustering organizes research papers by topic similarities.",
                ],
                industry: "Clustering discovers hidden customer segments and market opportunities.",
                keywords: &["clustering", "k-means", "similarity", "centroid", "unlabeled"],
                summary: "Clustering groups similar data points without labels; use for exploration.",
            },
        },
        Rule {
            triggers: &["activation", "relu", "sigmoid", "tanh"],
            content: Content {
                examples: &[
                    "ReLU in hidden layers allows networks to learn non-linear relationships.",
                    "Sigmoid in output layer constrains predictions to probability [0, 1].",
                ],
                industry: "Activation functions are critical for deep learning to work well.",
                keywords: &["activation function", "ReLU", "sigmoid", "non-linearity"],
                summary: "Activation functions introduce non-linearity enabling neural networks to learn complex patterns.",
            },
        },
        Rule {
            triggers: &["neural", "deep learning", "neural network"],
            content: Content {
                examples: &[
                    "Deep learning powers image recognition in Google Photos.",
                    "Neural networks enable voice assistants like Alexa to understand speech.",
                ],
                industry: "Deep learning dominates computer vision, NLP, and autonomous systems.",
                keywords: &["neural network", "layers", "backpropagation", "activation functions"],
                summary: "Neural networks with many layers enable learning complex patterns.",
            },
        },
    ],
    fallback: Content {
        examples: &[
            "Natural language processing enabling chatbots to understand questions.",
            "Computer vision helping autonomous vehicles detect objects.",
        ],
        industry: "AI is transforming every industry from healthcare to finance to transportation.",
        keywords: &["AI", "learning", "intelligence", "automation"],
        summary: GENERIC_SUMMARY,
    },
};

// =============================================================================
// Software Engineering
// =============================================================================

const SOFTWARE_ENGINEERING: Subject = Subject {
    name: "Software Engineering",
    definition: "Software Engineering is the systematic process of planning, designing, building, testing, and maintaining software systems.",
    samples: &[
        "What are SDLC models and their phases?",
        "Explain design patterns with examples",
        "What is agile methodology?",
        "What is version control and why is it important?",
        "Explain unit testing and test-driven development",
        "What is CI/CD pipeline?",
    ],
    rules: &[
        Rule {
            triggers: &["sdlc", "phases", "lifecycle"],
            content: Content {
                examples: &[
                    "Waterfall: planning -> design -> coding -> testing -> deployment.",
                    "Agile: iterative sprints with continuous feedback and improvement.",
                ],
                industry: "SDLC models guide software projects from inception to maintenance.",
                keywords: &["planning", "design", "implementation", "testing", "deployment"],
                summary: "SDLC phases ensure systematic, organized software development.",
            },
        },
        Rule {
            triggers: &["design pattern", "pattern"],
            content: Content {
                examples: &[
                    "Singleton pattern ensures only one instance of a database connection.",
                    "Factory pattern creates objects without specifying exact classes.",
                ],
                industry: "Design patterns reduce complexity and improve code maintainability.",
                keywords: &["design pattern", "reusable", "best practices", "architecture"],
                summary: "Design patterns are proven solutions to common engineering problems.",
            },
        },
        Rule {
            triggers: &["version control", "git", "svn"],
            content: Content {
                examples: &[
                    "Git enables teams to collaborate, tracking all code changes over time.",
                    "Branches allow parallel development of features before merging.",
                ],
                industry: "Version control is essential for multi-person software teams.",
                keywords: &["version control", "git", "commit", "branch", "merge"],
                summary: "Version control tracks code history, enables collaboration and rollback.",
            },
        },
        Rule {
            triggers: &["unit test", "testing", "test-driven"],
            content: Content {
                examples: &[
                    "Unit tests verify individual functions work correctly.",
                    "Test-driven development writes tests before implementation.",
                ],
                industry: "Testing ensures code quality and reduces production bugs.",
                keywords: &["unit test", "TDD", "assertion", "mock", "coverage"],
                summary: "Unit tests catch bugs early; test-driven development improves design.",
            },
        },
        Rule {
            triggers: &["ci", "cd", "continuous"],
            content: Content {
                examples: &[
                    "CI/CD pipelines automate building, testing, and deploying code on every commit.",
                    "Jenkins orchestrates testing and deployment workflows.",
                ],
                industry: "CI/CD enables rapid, reliable software delivery.",
                keywords: &["CI/CD", "continuous integration", "deployment", "pipeline"],
                summary: "CI/CD automates testing and deployment for faster, safer releases.",
            },
        },
        Rule {
            triggers: &["agile", "scrum"],
            content: Content {
                examples: &[
                    "Sprints of 2 weeks with daily standups and regular demos.",
                    "User stories and backlog prioritization for continuous delivery.",
                ],
                industry: "Agile dominates modern software development across tech companies.",
                keywords: &["agile", "scrum", "sprint", "backlog", "iteration"],
                summary: "Agile enables rapid feedback and continuous improvement.",
            },
        },
    ],
    fallback: Content {
        examples: &[
            "Planning large projects with clear requirements and timelines.",
            "Testing and debugging software to ensure reliability.",
        ],
        industry: "Software engineering practices separate hobby coding from professional development.",
        keywords: &["software", "engineering", "quality", "process"],
        summary: GENERIC_SUMMARY,
    },
};

// =============================================================================
// Compiler Design
// =============================================================================

const COMPILER_DESIGN: Subject = Subject {
    name: "Compiler Design",
    definition: "Compiler Design covers the theory and practice of translating source code into machine-executable instructions.",
    samples: &[
        "Explain lexical analysis and tokenization",
        "What is the role of parser in compilation?",
        "What is code generation?",
        "What is semantic analysis in compilation?",
        "Explain the symbol table in compilers",
        "What is intermediate representation?",
    ],
    rules: &[
        Rule {
            triggers: &["lexical", "tokenization", "token"],
            content: Content {
                examples: &[
                    "Converting 'int x = 5;' into tokens: INT, IDENTIFIER, ASSIGN, NUMBER.",
                    "Building a symbol table to track variable names and types.",
                ],
                industry: "Lexical analysis is the first phase in every compiler.",
                keywords: &["lexical analysis", "tokenization", "scanner", "lexeme"],
                summary: "Lexical analysis breaks source code into meaningful tokens.",
            },
        },
        Rule {
            triggers: &["parser", "parsing", "syntax"],
            content: Content {
                examples: &[
                    "Parser checks if statement is: 'if (condition) { body }'.",
                    "Building a parse tree to represent code structure.",
                ],
                industry: "Parsers enforce language syntax rules.",
                keywords: &["parsing", "syntax", "grammar", "parse tree"],
                summary: "Parser analyzes token sequence to build syntactic structure.",
            },
        },
        Rule {
            triggers: &["semantic", "type check", "scope"],
            content: Content {
                examples: &[
                    "Type checker ensures 'int x = \"hello\";' is caught as an error.",
                    "Scope checker ensures variables are declared before use.",
                ],
                industry: "Semantic analysis prevents type errors and undefined variables.",
                keywords: &["semantic analysis", "type checking", "scope", "symbol table"],
                summary: "Semantic analysis validates meaning; catches errors before code generation.",
            },
        },
        Rule {
            triggers: &["symbol table", "symbol", "scope", "binding"],
            content: Content {
                examples: &[
                    "Symbol table tracks variable name, type, scope, and memory address.",
                    "Scope resolution: inner scope variable shadows outer scope variable.",
                ],
                industry: "Symbol tables are crucial for managing variable visibility and type information.",
                keywords: &["symbol table", "scope", "binding", "lookup", "resolution"],
                summary: "Symbol tables track variable metadata across scopes for type safety.",
            },
        },
        Rule {
            triggers: &["intermediate", "representation", "ir", "ir code"],
            content: Content {
                examples: &[
                    "IR: 'x = a + b' becomes: t1 = LOAD a; t2 = LOAD b; t3 = ADD t1, t2; STORE t3, x.",
                    "IR enables platform-independent optimization before code generation.",
                ],
                industry: "IR allows compilers to optimize code independently of target platform.",
                keywords: &["intermediate representation", "IR", "optimization", "portable"],
                summary: "Intermediate representation bridges source code and machine code.",
            },
        },
        Rule {
            triggers: &["code generation", "codegen"],
            content: Content {
                examples: &[
                    "Translating 'x = a + b' into assembly: load a, add b, store x.",
                    "Optimizing loops for faster execution.",
                ],
                industry: "Code generation determines final program performance.",
                keywords: &["code generation", "assembly", "optimization", "machine code"],
                summary: "Code generation translates optimized intermediate code to machine instructions.",
            },
        },
    ],
    fallback: Content {
        examples: &[
            "Translating high-level language to machine instructions.",
            "Optimizing compiler output for speed and memory efficiency.",
        ],
        industry: "Compilers are fundamental tools enabling all software development.",
        keywords: &["compiler", "compilation", "translation", "optimization"],
        summary: GENERIC_SUMMARY,
    },
};

// =============================================================================
// Discrete Mathematics
// =============================================================================

const DISCRETE_MATHEMATICS: Subject = Subject {
    name: "Discrete Mathematics",
    definition: "Discrete Mathematics studies mathematical structures with distinct, separate values used in computer science.",
    samples: &[
        "What are sets and set operations?",
        "Explain graph theory basics",
        "What is combinatorics and probability?",
        "What are boolean algebra and logic gates?",
        "Explain trees in discrete mathematics",
        "What is mathematical induction?",
    ],
    rules: &[
        Rule {
            triggers: &["set", "set theory", "operations"],
            content: Content {
                examples: &[
                    "Set of all prime numbers: {2, 3, 5, 7, 11, ...}",
                    "Union of students in CS: all students in all CS sections.",
                ],
                industry: "Set theory foundations computer database design and logic.",
                keywords: &["set", "union", "intersection", "subset", "complement"],
                summary: "Sets organize elements; operations like union process them.",
            },
        },
        Rule {
            triggers: &["graph", "graph theory", "vertex", "edge"],
            content: Content {
                examples: &[
                    "Social network: people are vertices, friendships are edges.",
                    "City map: intersections are vertices, roads are edges.",
                ],
                industry: "Graph theory powers networking, recommendation engines, and routing.",
                keywords: &["graph", "vertex", "edge", "path", "connected"],
                summary: "Graphs model relationships; algorithms traverse or optimize them.",
            },
        },
        Rule {
            triggers: &["boolean", "boolean algebra", "logic"],
            content: Content {
                examples: &[
                    "Boolean expression: (A AND B) OR NOT(C) simplifies circuit logic.",
                    "Truth table shows all possible inputs and outputs for a Boolean function.",
                ],
                industry: "Boolean logic is the foundation of digital circuit and CPU design.",
                keywords: &["Boolean algebra", "AND", "OR", "NOT", "truth table"],
                summary: "Boolean algebra simplifies logic; gates implement Boolean operations.",
            },
        },
        Rule {
            triggers: &["logic gate", "gate", "circuit"],
            content: Content {
                examples: &[
                    "AND gate: output 1 only if both inputs are 1.",
                    "OR gate: output 1 if at least one input is 1.",
                ],
                industry: "Logic gates are building blocks of all digital computers.",
                keywords: &["logic gate", "AND", "OR", "NOT", "NAND", "circuit"],
                summary: "Logic gates implement Boolean operations; combined they form circuits.",
            },
        },
        Rule {
            triggers: &["induction", "mathematical induction", "proof"],
            content: Content {
                examples: &[
                    "Prove 1 + 2 + ... + n = n(n+1)/2 by induction over n.",
                    "Base case: n=1 works. Inductive step: if true for n, prove for n+1.",
                ],
                industry: "Mathematical induction proves properties over infinite sequences.",
                keywords: &["mathematical induction", "base case", "inductive step", "proof"],
                summary: "Induction proves statements by establishing base case and inductive step.",
            },
        },
        Rule {
            triggers: &["combinatorics", "probability", "permutation", "combination"],
            content: Content {
                examples: &[
                    "Permutations: arranging 3 books in different orders.",
                    "Probability: chance of drawing a specific card from a deck.",
                ],
                industry: "Probability and combinatorics underpin cryptography and algorithms.",
                keywords: &["combinatorics", "probability", "factorial", "expected value"],
                summary: "Combinatorics counts arrangements; probability measures uncertainty.",
            },
        },
    ],
    fallback: Content {
        examples: &[
            "Logic and reasoning problems solved using discrete structures.",
            "Counting problems using combinatorics and permutations.",
        ],
        industry: "Discrete math is essential for algorithm analysis and computer science.",
        keywords: &["discrete", "mathematics", "logic", "counting"],
        summary: GENERIC_SUMMARY,
    },
};
